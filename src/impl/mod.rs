// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod ledger_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod ledger_document_model;
        pub(crate) mod payment_amount_model;
        pub(crate) mod save_timestamp_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod invoice_report;
        pub(crate) mod ledger;
        pub(crate) mod line_item;
        pub(crate) mod payment_row;
        pub(crate) mod person;
        pub(crate) mod roster;
        pub(crate) mod session;
    }
    pub(crate) mod logic {
        pub(crate) mod amount_parser;
        pub(crate) mod invoice_processor;
        pub(crate) mod ledger_impl;
        pub(crate) mod roster_impl;
        pub(crate) mod session_impl;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod persistence_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod payments_csv_printer;
    pub(crate) mod report_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::invoice_report::*;
        pub use crate::domain::entities::ledger::*;
        pub use crate::domain::entities::line_item::*;
        pub use crate::domain::entities::payment_row::*;
        pub use crate::domain::entities::person::*;
        pub use crate::domain::entities::roster::*;
        pub use crate::domain::entities::session::*;
    }

    pub mod parsing {
        pub use crate::domain::logic::amount_parser::{AmountParser, ParsedLine};
    }
}
