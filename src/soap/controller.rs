use std::collections::HashMap;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};
use crate::catalog::contract::wsdl;
use crate::catalog::fault::Fault;
use crate::core::controller::AppState;
use crate::soap::envelope::{parse_request, render_fault, render_response, XML_CONTENT_TYPE};

fn xml_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, XML_CONTENT_TYPE)], body).into_response()
}

/// Serves the WSDL document on `GET <path>?wsdl`.
pub async fn describe_service(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Response {
    if !params.keys().any(|k| k.eq_ignore_ascii_case("wsdl")) {
        return (StatusCode::BAD_REQUEST, "append ?wsdl to fetch the service description").into_response();
    }
    xml_response(StatusCode::OK, wsdl(state.config.soap_location.as_str()))
}

/// Unmarshals one SOAP call, dispatches it and marshals the result or fault.
/// Faults are sent with status 500 as the SOAP 1.1 http binding requires.
pub async fn invoke_operation(
    State(state): State<AppState>,
    body: Bytes) -> Response {
    let request = match std::str::from_utf8(&body)
        .map_err(|err| Fault::client(format!("soap envelope is not valid utf-8: {}", err).as_str()))
        .and_then(parse_request) {
        Ok(request) => request,
        Err(fault) => {
            warn!(fault = %fault, "rejected soap envelope");
            return xml_response(StatusCode::INTERNAL_SERVER_ERROR, render_fault(&fault));
        }
    };
    match state.dispatcher.dispatch(request.operation, &request.arguments).await {
        Ok(result) => {
            info!(operation = %request.operation, "soap operation completed");
            xml_response(StatusCode::OK, render_response(request.operation, &result))
        }
        Err(fault) => {
            info!(operation = %request.operation, fault = %fault, "soap operation faulted");
            xml_response(StatusCode::INTERNAL_SERVER_ERROR, render_fault(&fault))
        }
    }
}
