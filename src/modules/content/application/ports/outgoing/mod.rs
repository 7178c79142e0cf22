mod content_gateway;

pub use content_gateway::{
    ContentGateway, FilePart, GatewayError, GatewayRequest, GatewayResponse, HttpMethod,
    MultipartBody, RequestBody,
};
