mod arena;
mod handle;
mod iter;
mod node;
mod raw_tree;

pub(crate) use iter::RawIter;
pub(crate) use raw_tree::{Duplicates, InsertResult, RawTree};
