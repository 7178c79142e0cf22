pub mod delete_record;
pub mod list_records;
pub mod record_form;
pub mod submit_record;

pub use delete_record::{delete_record_handler, DeleteQuery};
pub use list_records::list_records_handler;
pub use record_form::{edit_record_form_handler, new_record_form_handler};
pub use submit_record::{
    create_record_handler, update_record_handler, SubmitRecordRequest, UploadDto,
};
