//! Block Model - page data model for the visual builder
//!
//! This crate holds the document side of the builder: the container, the
//! blocks placed on it, the focus (selection) partition, and the component
//! palette registry. It carries no editing logic; the command engine crate
//! mutates these types through its host interface.

mod block;
mod block_id;
mod component;
mod focus;
mod page;

pub use block::*;
pub use block_id::*;
pub use component::*;
pub use focus::*;
pub use page::*;
