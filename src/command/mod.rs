pub(crate) mod analyze;
pub(crate) mod classify;
pub(crate) mod conjugate;
pub(crate) mod matching;
