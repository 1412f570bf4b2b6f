pub mod collecting;
pub mod console;
pub mod filter;
pub mod func;
pub mod null;
