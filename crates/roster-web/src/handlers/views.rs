use super::Result;
use crate::data::{ContactWeb, IntoWeb, TempFileWrapper};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::response::Redirect;
use rocket::{FromForm, State, get, post, uri};
use rocket_dyn_templates::Template;
use roster_api::data::ContactList;
use roster_api::service::{self, ServiceContext};
use roster_api::util::file::UploadFileHandler;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListPage {
    contacts: Vec<ContactRow>,
    summary: Option<String>,
    query: String,
}

#[derive(Debug, Serialize)]
pub struct ContactRow {
    contact: ContactWeb,
    remove_action: String,
}

#[derive(Debug, Serialize)]
pub struct NewPage {
    error: Option<String>,
    name: String,
    email: String,
}

#[derive(Debug, FromForm)]
pub struct NewContactForm<'r> {
    pub name: String,
    pub email: String,
    pub avatar: Option<TempFile<'r>>,
}

/// The list screen. The whole collection is loaded and the visible rows
/// are derived from it and the query on every request.
#[get("/?<q>")]
pub async fn list_view(state: &State<ServiceContext>, q: Option<&str>) -> Result<Template> {
    let contacts = state.contact_service.get_contacts().await?;
    let list = ContactList::with_query(q.unwrap_or_default());
    let view = list.derive(&contacts);

    let rows: Vec<ContactRow> = view
        .rows()
        .iter()
        .map(|&c| {
            let remove_action = if list.is_filtering() {
                uri!(remove_contact_view(id = c.id.as_str(), q = Some(list.query())))
            } else {
                uri!(remove_contact_view(id = c.id.as_str(), q = _))
            };
            ContactRow {
                contact: c.clone().into_web(),
                remove_action: remove_action.to_string(),
            }
        })
        .collect();

    Ok(Template::render(
        "contacts/list",
        ListPage {
            contacts: rows,
            summary: view.summary().map(|s| s.to_string()),
            query: list.query().to_owned(),
        },
    ))
}

/// The remove button of a list row. Redirects back to the list, keeping
/// the active filter.
#[post("/remove/<id>?<q>")]
pub async fn remove_contact_view(
    state: &State<ServiceContext>,
    id: &str,
    q: Option<&str>,
) -> Result<Redirect> {
    state.contact_service.delete(id).await?;
    let redirect = match q {
        Some(query) if !query.is_empty() => Redirect::to(uri!(list_view(q = Some(query)))),
        _ => Redirect::to(uri!(list_view(q = _))),
    };
    Ok(redirect)
}

#[get("/new")]
pub async fn create_view() -> Template {
    Template::render(
        "contacts/new",
        NewPage {
            error: None,
            name: String::new(),
            email: String::new(),
        },
    )
}

/// The create form post. Validation failures re-render the form with the
/// message and the entered values, everything else redirects to the list.
#[post("/new", data = "<form>")]
pub async fn create_contact_view(
    state: &State<ServiceContext>,
    form: Form<NewContactForm<'_>>,
) -> Result<std::result::Result<Redirect, Template>> {
    match create_from_form(state, &form).await {
        Ok(_) => Ok(Ok(Redirect::to(uri!(list_view(q = _))))),
        Err(crate::error::Error::Service(service::Error::Validation(message))) => Ok(Err(
            Template::render(
                "contacts/new",
                NewPage {
                    error: Some(message),
                    name: form.name.clone(),
                    email: form.email.clone(),
                },
            ),
        )),
        Err(e) => Err(e),
    }
}

async fn create_from_form(
    state: &State<ServiceContext>,
    form: &NewContactForm<'_>,
) -> Result<ContactWeb> {
    let avatar_file_upload_id = match form.avatar {
        Some(ref file) if file.len() > 0 => {
            let upload_file_handler: &dyn UploadFileHandler =
                &TempFileWrapper(file) as &dyn UploadFileHandler;
            state
                .file_upload_service
                .validate_attached_file(upload_file_handler)
                .await?;
            let uploaded = state
                .file_upload_service
                .upload_file(upload_file_handler)
                .await?;
            Some(uploaded.file_upload_id)
        }
        _ => None,
    };

    let contact = state
        .contact_service
        .add_contact(&form.name, &form.email, avatar_file_upload_id)
        .await?;
    Ok(contact.into_web())
}
