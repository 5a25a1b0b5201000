pub(crate) mod container;
pub(crate) mod mount;
pub(crate) mod render;
pub(crate) mod signal;
