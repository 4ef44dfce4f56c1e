use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(WriteError, "Error writing file.");

// Parsing-related.
define_client_error!(
    CorruptDocument,
    "Invalid ledger document: {details}.",
    { details: &str }
);
define_client_error!(
    InvalidPaymentAmount,
    "Invalid payment amount: '{value}'.",
    { value: &str }
);

// Ledger-related.
define_client_error!(EmptyPersonName, "Person name cannot be empty.");
define_client_error!(EmptyInvoiceText, "No invoice items were provided.");
define_client_error!(
    DuplicatePersonName,
    "A person named '{name}' already exists.",
    { name: &str }
);
define_client_error!(PersonNotFound, "Person '{name}' not found.", { name: &str });
