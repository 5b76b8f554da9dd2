pub(crate) mod element;
pub(crate) mod frames;
