pub(crate) mod budget;
pub(crate) mod contracts;
pub(crate) mod dashboard;
pub(crate) mod messages;
pub(crate) mod payments;
pub(crate) mod vendors;
