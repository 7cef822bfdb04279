pub mod contact_form;
pub mod header;
pub mod project_dialog;
pub mod project_list;
pub mod sections;
