use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteRecordUseCase, ListRecordsUseCase, PrepareRecordFormUseCase, SubmitRecordUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentGateway;
use crate::modules::content::application::services::{
    DeleteRecordService, ListRecordsService, PrepareRecordFormService, SubmitRecordService,
};
use crate::modules::content::domain::{
    Academic, Award, Certification, Experience, Profile, Project, Research, Resource, Skill,
};

/// Dashboard use cases for one resource.
pub struct RecordUseCases<R: Resource> {
    pub list: Arc<dyn ListRecordsUseCase<R>>,
    pub prepare_form: Arc<dyn PrepareRecordFormUseCase<R>>,
    pub submit: Arc<dyn SubmitRecordUseCase<R>>,
    pub delete: Arc<dyn DeleteRecordUseCase<R>>,
}

impl<R: Resource> Clone for RecordUseCases<R> {
    fn clone(&self) -> Self {
        Self {
            list: Arc::clone(&self.list),
            prepare_form: Arc::clone(&self.prepare_form),
            submit: Arc::clone(&self.submit),
            delete: Arc::clone(&self.delete),
        }
    }
}

impl<R: Resource> RecordUseCases<R> {
    /// Wires the services over one gateway; submit and delete refresh
    /// through the same list use case the dashboard reads from.
    pub fn over(gateway: Arc<dyn ContentGateway>) -> Self {
        let list: Arc<dyn ListRecordsUseCase<R>> =
            Arc::new(ListRecordsService::<R>::new(Arc::clone(&gateway)));

        Self {
            prepare_form: Arc::new(PrepareRecordFormService::<R>::new(Arc::clone(&gateway))),
            submit: Arc::new(SubmitRecordService::new(
                Arc::clone(&gateway),
                Arc::clone(&list),
            )),
            delete: Arc::new(DeleteRecordService::new(gateway, Arc::clone(&list))),
            list,
        }
    }
}

#[derive(Clone)]
pub struct ContentUseCases {
    pub profile: RecordUseCases<Profile>,
    pub academic: RecordUseCases<Academic>,
    pub experience: RecordUseCases<Experience>,
    pub project: RecordUseCases<Project>,
    pub skill: RecordUseCases<Skill>,
    pub award: RecordUseCases<Award>,
    pub certification: RecordUseCases<Certification>,
    pub research: RecordUseCases<Research>,
}

impl ContentUseCases {
    pub fn over(gateway: Arc<dyn ContentGateway>) -> Self {
        Self {
            profile: RecordUseCases::over(Arc::clone(&gateway)),
            academic: RecordUseCases::over(Arc::clone(&gateway)),
            experience: RecordUseCases::over(Arc::clone(&gateway)),
            project: RecordUseCases::over(Arc::clone(&gateway)),
            skill: RecordUseCases::over(Arc::clone(&gateway)),
            award: RecordUseCases::over(Arc::clone(&gateway)),
            certification: RecordUseCases::over(Arc::clone(&gateway)),
            research: RecordUseCases::over(gateway),
        }
    }
}

/// Picks the use cases of one resource out of `ContentUseCases`.
pub trait SelectUseCases: Resource {
    fn select(content: &ContentUseCases) -> &RecordUseCases<Self>;
}

macro_rules! select_use_cases {
    ($($record:ty => $field:ident),* $(,)?) => {
        $(
            impl SelectUseCases for $record {
                fn select(content: &ContentUseCases) -> &RecordUseCases<Self> {
                    &content.$field
                }
            }
        )*
    };
}

select_use_cases! {
    Profile => profile,
    Academic => academic,
    Experience => experience,
    Project => project,
    Skill => skill,
    Award => award,
    Certification => certification,
    Research => research,
}
