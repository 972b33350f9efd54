pub mod pointer;

pub use pointer::EventListener;
