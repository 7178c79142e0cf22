use tracing::warn;

use crate::content::application::content_use_cases::{ContentUseCases, SelectUseCases};
use crate::content::domain::presentation::{render_section, Presentable, SectionView, ViewMode};

/// Fetches one resource and renders it; a failed fetch renders nothing.
pub(super) async fn load_section<R>(
    content: &ContentUseCases,
    mode: ViewMode,
) -> Option<SectionView<R::Card>>
where
    R: Presentable + SelectUseCases,
{
    match R::select(content).list.execute().await {
        Ok(records) => render_section(Some(records), mode),
        Err(e) => {
            warn!(resource = %R::KIND, error = %e, "Section fetch failed; hiding section");
            None
        }
    }
}
