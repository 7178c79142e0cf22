mod delete_record;
mod list_records;
mod prepare_record_form;
mod submit_record;

pub use delete_record::{
    DeleteConfirmation, DeleteOutcome, DeleteRecordError, DeleteRecordUseCase,
};
pub use list_records::{ListRecordsError, ListRecordsUseCase};
pub use prepare_record_form::{
    FormMode, PrepareFormError, PrepareRecordFormUseCase, RecordForm,
};
pub use submit_record::{
    SubmitOutcome, SubmitRecordCommand, SubmitRecordError, SubmitRecordUseCase,
};
