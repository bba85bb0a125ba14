use crate::data::{
    ContactWeb, ContactsResponse, NewContactPayload, SuccessResponse, UploadFileForm,
    UploadFilesResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::contacts::return_contacts,
        crate::handlers::contacts::return_contact,
        crate::handlers::contacts::new_contact,
        crate::handlers::contacts::remove_contact,
        crate::handlers::contacts::upload_file,
    ),
    components(schemas(
        ContactWeb,
        ContactsResponse<ContactWeb>,
        NewContactPayload,
        SuccessResponse,
        UploadFileForm,
        UploadFilesResponse,
    ))
)]
pub struct ApiDocs;
