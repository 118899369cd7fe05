//! Message contract of the SOAP book service.
//!
//! The operation table below is the single description of the wire shapes: the
//! dispatcher filters arguments and orders results by it, and the WSDL document
//! served to clients is rendered from it.

use std::fmt;
use std::fmt::{Display, Formatter};
use quick_xml::escape::escape;

pub const TARGET_NAMESPACE: &str = "http://example.com/books";
pub const SERVICE_NAME: &str = "BookService";
pub const PORT_NAME: &str = "BookPort";
pub const PORT_TYPE_NAME: &str = "BookPortType";
pub const BINDING_NAME: &str = "BookBinding";
pub const SERVICE_DOCUMENTATION: &str = "SOAP Book CRUD API";
pub const SOAP_HTTP_TRANSPORT: &str = "http://schemas.xmlsoap.org/soap/http";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operation {
    GetBook,
    CreateBook,
    UpdateBook,
    DeleteBook,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::GetBook,
        Operation::CreateBook,
        Operation::UpdateBook,
        Operation::DeleteBook,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetBook => "GetBook",
            Operation::CreateBook => "CreateBook",
            Operation::UpdateBook => "UpdateBook",
            Operation::DeleteBook => "DeleteBook",
        }
    }

    // rpc clients name the body element after the operation, some after its input message
    pub fn from_element(name: &str) -> Option<Operation> {
        let name = name.strip_suffix("Request").unwrap_or(name);
        Operation::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn contract(&self) -> &'static OperationContract {
        match self {
            Operation::GetBook => &CONTRACTS[0],
            Operation::CreateBook => &CONTRACTS[1],
            Operation::UpdateBook => &CONTRACTS[2],
            Operation::DeleteBook => &CONTRACTS[3],
        }
    }

    pub fn request_message(&self) -> String {
        format!("{}Request", self.name())
    }

    pub fn response_message(&self) -> String {
        format!("{}Response", self.name())
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldType {
    Int,
    String,
}

impl FieldType {
    pub fn xsd_type(&self) -> &'static str {
        match self {
            FieldType::Int => "xsd:int",
            FieldType::String => "xsd:string",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldType,
}

const fn int(name: &'static str) -> Field {
    Field { name, kind: FieldType::Int }
}

const fn string(name: &'static str) -> Field {
    Field { name, kind: FieldType::String }
}

#[derive(Debug, PartialEq, Eq)]
pub struct OperationContract {
    pub operation: Operation,
    pub input: &'static [Field],
    pub output: &'static [Field],
}

impl OperationContract {
    pub fn accepts(&self, name: &str) -> bool {
        self.input.iter().any(|f| f.name == name)
    }
}

pub static CONTRACTS: [OperationContract; 4] = [
    OperationContract {
        operation: Operation::GetBook,
        input: &[int("id")],
        output: &[int("id"), string("title"), string("author"), int("year")],
    },
    OperationContract {
        operation: Operation::CreateBook,
        input: &[string("title"), string("author"), int("year")],
        output: &[string("message"), int("id")],
    },
    OperationContract {
        operation: Operation::UpdateBook,
        input: &[int("id"), string("title"), string("author"), int("year")],
        output: &[string("message"), int("id")],
    },
    OperationContract {
        operation: Operation::DeleteBook,
        input: &[int("id")],
        output: &[string("message")],
    },
];

fn render_message(out: &mut String, name: &str, fields: &[Field]) {
    out.push_str(&format!("  <message name=\"{}\">\n", name));
    for field in fields {
        out.push_str(&format!("    <part name=\"{}\" type=\"{}\"/>\n", field.name, field.kind.xsd_type()));
    }
    out.push_str("  </message>\n");
}

/// Renders the WSDL 1.1 document describing every operation, advertising `location`
/// as the address of the service port.
pub fn wsdl(location: &str) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<definitions name=\"{service}\"\n  targetNamespace=\"{ns}\"\n  xmlns=\"http://schemas.xmlsoap.org/wsdl/\"\n  xmlns:soap=\"http://schemas.xmlsoap.org/wsdl/soap/\"\n  xmlns:tns=\"{ns}\"\n  xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\">\n\n",
        service = SERVICE_NAME, ns = TARGET_NAMESPACE));

    for contract in CONTRACTS.iter() {
        render_message(&mut out, &contract.operation.request_message(), contract.input);
        render_message(&mut out, &contract.operation.response_message(), contract.output);
        out.push('\n');
    }

    out.push_str(&format!("  <portType name=\"{}\">\n", PORT_TYPE_NAME));
    for op in Operation::ALL {
        out.push_str(&format!("    <operation name=\"{}\">\n", op.name()));
        out.push_str(&format!("      <input message=\"tns:{}\"/>\n", op.request_message()));
        out.push_str(&format!("      <output message=\"tns:{}\"/>\n", op.response_message()));
        out.push_str("    </operation>\n");
    }
    out.push_str("  </portType>\n\n");

    out.push_str(&format!("  <binding name=\"{}\" type=\"tns:{}\">\n", BINDING_NAME, PORT_TYPE_NAME));
    out.push_str(&format!("    <soap:binding style=\"rpc\" transport=\"{}\"/>\n", SOAP_HTTP_TRANSPORT));
    for op in Operation::ALL {
        out.push_str(&format!(
            "    <operation name=\"{name}\"><soap:operation soapAction=\"{name}\"/></operation>\n", name = op.name()));
    }
    out.push_str("  </binding>\n\n");

    out.push_str(&format!("  <service name=\"{}\">\n", SERVICE_NAME));
    out.push_str(&format!("    <documentation>{}</documentation>\n", SERVICE_DOCUMENTATION));
    out.push_str(&format!("    <port name=\"{}\" binding=\"tns:{}\">\n", PORT_NAME, BINDING_NAME));
    out.push_str(&format!("      <soap:address location=\"{}\"/>\n", escape(location)));
    out.push_str("    </port>\n");
    out.push_str("  </service>\n");
    out.push_str("</definitions>\n");
    out
}
