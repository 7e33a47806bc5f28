// Static content: sample catalog and stub recommendations

pub mod catalog;
pub mod recommendations;
