pub mod empty_state;
pub mod footer;
pub mod header;
pub mod input_box;
pub mod logo;
pub mod task_list;
