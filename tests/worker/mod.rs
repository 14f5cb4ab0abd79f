mod handler;
mod memory;
