//! HTTP Handlers

use axum::Form;
use kernel::AttackResult;

use crate::application::attack4::Attack4UseCase;
use crate::presentation::dto::Attack4Form;

/// POST /CrossSiteScripting/attack4
pub async fn attack4(Form(form): Form<Attack4Form>) -> AttackResult {
    Attack4UseCase.execute(&form.editor2)
}
