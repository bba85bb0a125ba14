use super::Result;
use crate::data::{
    ContactWeb, ContactsResponse, IntoWeb, NewContactPayload, SuccessResponse, TempFileWrapper,
    UploadFileForm, UploadFilesResponse,
};
use rocket::form::Form;
use rocket::http::ContentType;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post};
use roster_api::service::{Error, ServiceContext};
use roster_api::util::file::{UploadFileHandler, detect_content_type_for_bytes};

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts/list",
    description = "List contacts, optionally narrowed by a name search term",
    responses(
        (status = 200, description = "The contacts", body = ContactsResponse<ContactWeb>)
    )
)]
#[get("/list?<search_term>")]
pub async fn return_contacts(
    state: &State<ServiceContext>,
    search_term: Option<&str>,
) -> Result<Json<ContactsResponse<ContactWeb>>> {
    let contacts = match search_term {
        Some(term) => state.contact_service.search_contacts(term).await?,
        None => state.contact_service.get_contacts().await?,
    };
    Ok(Json(ContactsResponse {
        contacts: contacts.into_iter().map(|c| c.into_web()).collect(),
    }))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts/detail/{id}",
    description = "Fetch a single contact",
    responses(
        (status = 200, description = "The contact", body = ContactWeb)
    )
)]
#[get("/detail/<id>")]
pub async fn return_contact(state: &State<ServiceContext>, id: &str) -> Result<Json<ContactWeb>> {
    let contact: ContactWeb = state.contact_service.get_contact(id).await?.into_web();
    Ok(Json(contact))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts/create",
    description = "Create a new contact, optionally with a previously uploaded avatar",
    responses(
        (status = 200, description = "The created contact", body = ContactWeb)
    )
)]
#[post("/create", format = "json", data = "<new_contact_payload>")]
pub async fn new_contact(
    state: &State<ServiceContext>,
    new_contact_payload: Json<NewContactPayload>,
) -> Result<Json<ContactWeb>> {
    let payload = new_contact_payload.0;
    let contact = state
        .contact_service
        .add_contact(&payload.name, &payload.email, payload.avatar_file_upload_id)
        .await?;
    Ok(Json(contact.into_web()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts/remove/{id}",
    description = "Remove the contact with the given id",
    responses(
        (status = 200, description = "Success", body = SuccessResponse)
    )
)]
#[delete("/remove/<id>")]
pub async fn remove_contact(
    state: &State<ServiceContext>,
    id: &str,
) -> Result<Json<SuccessResponse>> {
    state.contact_service.delete(id).await?;
    Ok(Json(SuccessResponse::new()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts/upload_avatar",
    description = "Stage an avatar image for a contact that is about to be created",
    responses(
        (status = 200, description = "The upload id to create the contact with", body = UploadFilesResponse)
    )
)]
#[post("/upload_avatar", data = "<file_upload_form>")]
pub async fn upload_file(
    state: &State<ServiceContext>,
    file_upload_form: Form<UploadFileForm<'_>>,
) -> Result<Json<UploadFilesResponse>> {
    let file = &file_upload_form.file;
    let upload_file_handler: &dyn UploadFileHandler =
        &TempFileWrapper(file) as &dyn UploadFileHandler;

    state
        .file_upload_service
        .validate_attached_file(upload_file_handler)
        .await?;

    let file_upload_response = state
        .file_upload_service
        .upload_file(upload_file_handler)
        .await?;

    Ok(Json(file_upload_response.into_web()))
}

#[get("/temp_file/<file_upload_id>")]
pub async fn get_temp_file(
    state: &State<ServiceContext>,
    file_upload_id: &str,
) -> Result<(ContentType, Vec<u8>)> {
    match state
        .file_upload_service
        .get_temp_file(file_upload_id)
        .await?
    {
        Some((_file_name, file_bytes)) => {
            let content_type = match detect_content_type_for_bytes(&file_bytes) {
                None => None,
                Some(t) => ContentType::parse_flexible(&t),
            }
            .ok_or(Error::Validation(String::from(
                "Content Type of the requested file could not be determined",
            )))?;
            Ok((content_type, file_bytes))
        }
        None => Err(Error::NotFound.into()),
    }
}
