use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use crate::catalog::contract::{Operation, TARGET_NAMESPACE};
use crate::catalog::dispatcher::{ArgumentRecord, ResultRecord};
use crate::catalog::fault::Fault;
use crate::core::library::LibraryError;

pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

// SoapRequest is a parsed rpc call: the body's first element names the operation
// and each of its child elements carries one argument.
#[derive(Debug, PartialEq)]
pub struct SoapRequest {
    pub operation: Operation,
    pub arguments: ArgumentRecord,
}

// text counts only when it sits directly inside an argument element
fn in_argument(body_depth: Option<usize>, open: usize) -> bool {
    body_depth.map_or(false, |depth| open == depth + 2)
}

pub fn parse_request(xml: &str) -> Result<SoapRequest, Fault> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let decoder = reader.decoder();

    let mut stack: Vec<String> = vec![];
    let mut body_depth: Option<usize> = None;
    let mut operation: Option<String> = None;
    let mut arguments = ArgumentRecord::new();
    let mut current: Option<(String, String)> = None;

    loop {
        match reader.read_event().map_err(LibraryError::from)? {
            Event::Start(e) => {
                let name = decoder.decode(e.local_name().as_ref()).map_err(LibraryError::from)?.into_owned();
                match body_depth {
                    None => {
                        if name == "Body" && stack.last().map(String::as_str) == Some("Envelope") {
                            body_depth = Some(stack.len() + 1);
                        }
                    }
                    Some(depth) if stack.len() == depth && operation.is_none() => {
                        operation = Some(name.clone());
                    }
                    Some(depth) if stack.len() == depth + 1 && operation.is_some() => {
                        current = Some((name.clone(), String::new()));
                    }
                    _ => {}
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = decoder.decode(e.local_name().as_ref()).map_err(LibraryError::from)?.into_owned();
                match body_depth {
                    Some(depth) if stack.len() == depth && operation.is_none() => {
                        operation = Some(name);
                    }
                    Some(depth) if stack.len() == depth + 1 && operation.is_some() => {
                        arguments.insert(name, String::new());
                    }
                    _ => {}
                }
            }
            Event::Text(e) => {
                if let Some((_, value)) = current.as_mut().filter(|_| in_argument(body_depth, stack.len())) {
                    value.push_str(&e.unescape().map_err(LibraryError::from)?);
                }
            }
            Event::CData(e) => {
                if let Some((_, value)) = current.as_mut().filter(|_| in_argument(body_depth, stack.len())) {
                    value.push_str(&decoder.decode(&e).map_err(LibraryError::from)?);
                }
            }
            Event::End(_) => {
                let _ = stack.pop();
                if let Some(depth) = body_depth {
                    if stack.len() == depth + 1 {
                        if let Some((name, value)) = current.take() {
                            arguments.insert(name, value);
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if body_depth.is_none() {
        return Err(Fault::client("missing soap Envelope/Body"));
    }
    let name = operation.ok_or_else(|| Fault::client("missing operation in soap Body"))?;
    let operation = Operation::from_element(name.as_str())
        .ok_or_else(|| Fault::client(format!("unknown operation {}", name).as_str()))?;
    Ok(SoapRequest { operation, arguments })
}

fn envelope(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?><soap:Envelope xmlns:soap=\"{}\" xmlns:tns=\"{}\"><soap:Body>{}</soap:Body></soap:Envelope>",
        SOAP_ENVELOPE_NS, TARGET_NAMESPACE, body)
}

pub fn render_response(operation: Operation, result: &ResultRecord) -> String {
    let mut body = format!("<tns:{}>", operation.response_message());
    for (name, value) in result.fields() {
        body.push_str(&format!("<{name}>{}</{name}>", escape(value.as_str()), name = name));
    }
    body.push_str(&format!("</tns:{}>", operation.response_message()));
    envelope(body.as_str())
}

pub fn render_fault(fault: &Fault) -> String {
    envelope(format!(
        "<soap:Fault><faultcode>{}</faultcode><faultstring>{}</faultstring></soap:Fault>",
        fault.code.qualified(), escape(fault.string.as_str())).as_str())
}
