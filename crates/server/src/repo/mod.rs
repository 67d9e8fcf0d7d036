pub mod case;
pub mod cause_list;
