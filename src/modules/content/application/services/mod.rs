mod delete_record_service;
mod list_records_service;
mod prepare_record_form_service;
mod submit_record_service;

pub use delete_record_service::DeleteRecordService;
pub use list_records_service::ListRecordsService;
pub use prepare_record_form_service::PrepareRecordFormService;
pub use submit_record_service::SubmitRecordService;
