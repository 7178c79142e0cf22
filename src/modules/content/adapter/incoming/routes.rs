use actix_web::web;

use crate::content::adapter::incoming::web::routes::{
    create_record_handler, delete_record_handler, edit_record_form_handler,
    list_records_handler, new_record_form_handler, update_record_handler,
};
use crate::content::application::content_use_cases::SelectUseCases;
use crate::content::domain::{
    Academic, Award, Certification, Experience, Profile, Project, Research, Skill,
};

/// Registers the dashboard CRUD routes of one resource under
/// `/api/dashboard/{slug}`. The profile has no delete route.
pub fn configure_resource<R: SelectUseCases>(cfg: &mut web::ServiceConfig) {
    let base = format!("/api/dashboard/{}", R::KIND.slug());

    cfg.service(
        web::resource(base.clone())
            .route(web::get().to(list_records_handler::<R>))
            .route(web::post().to(create_record_handler::<R>)),
    )
    .service(
        web::resource(format!("{}/form", base)).route(web::get().to(new_record_form_handler::<R>)),
    )
    .service(
        web::resource(format!("{}/{{id}}/form", base))
            .route(web::get().to(edit_record_form_handler::<R>)),
    );

    let mut record = web::resource(format!("{}/{{id}}", base))
        .route(web::put().to(update_record_handler::<R>));
    if !R::KIND.is_singleton() {
        record = record.route(web::delete().to(delete_record_handler::<R>));
    }
    cfg.service(record);
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_resource::<Profile>(cfg);
    configure_resource::<Academic>(cfg);
    configure_resource::<Experience>(cfg);
    configure_resource::<Project>(cfg);
    configure_resource::<Skill>(cfg);
    configure_resource::<Award>(cfg);
    configure_resource::<Certification>(cfg);
    configure_resource::<Research>(cfg);
}
