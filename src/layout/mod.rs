pub(crate) mod anchor;
pub(crate) mod geometry;
pub(crate) mod partition;
pub(crate) mod trailing;
