mod account;
mod email;
mod idea;
mod role;
mod techstack;
