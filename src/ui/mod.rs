pub mod click_areas;
pub mod components;
pub mod todo_list;
