pub(crate) mod animator;
pub(crate) mod descriptor;
pub(crate) mod duration;
pub(crate) mod ease;
