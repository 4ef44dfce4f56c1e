use std::{collections::HashSet, str::FromStr as _};

use chrono::NaiveDateTime;
use fractic_server_error::ServerError;
use rust_decimal::{
    prelude::{FromPrimitive as _, ToPrimitive as _},
    Decimal,
};
use tracing::warn;

use crate::{
    domain::logic::amount_parser::AmountParser,
    entities::{Ledger, LineItem, Person, RosterOrder, Session},
    errors::CorruptDocument,
};

use super::save_timestamp_model::SaveTimestampModel;

#[derive(Debug, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct LedgerDocumentModel {
    pub pessoas: Vec<PersonModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historico_order: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_salvamento: Option<String>,
}

#[derive(Debug, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct PersonModel {
    pub nome: String,
    pub despesas: Vec<ExpenseModel>,
    /// Written for readers of the file, ignored on load.
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub pago: Option<f64>,
}

#[derive(Debug, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct ExpenseModel {
    pub raw_line: String,
    pub valor: f64,
}

fn to_number(amount: Decimal) -> f64 {
    amount.round_dp(2).to_f64().unwrap_or_default()
}

fn to_amount(value: f64, field: &str, person: &str) -> Result<Decimal, ServerError> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(2))
        .filter(|d| !d.is_sign_negative() && *d <= AmountParser::max_amount())
        .ok_or_else(|| {
            CorruptDocument::new(&format!(
                "'{}' of '{}' must be a number between 0 and {}, got {}",
                field,
                person,
                AmountParser::max_amount(),
                value
            ))
        })
}

impl LedgerDocumentModel {
    pub(crate) fn from_session(session: &Session, saved_at: NaiveDateTime) -> Self {
        Self {
            pessoas: session
                .ledger()
                .people()
                .map(|person| PersonModel {
                    nome: person.name().to_string(),
                    despesas: person
                        .items()
                        .iter()
                        .map(|item| ExpenseModel {
                            raw_line: item.raw_text().to_string(),
                            valor: to_number(item.amount()),
                        })
                        .collect(),
                    total: Some(to_number(person.total())),
                    pago: Some(to_number(person.paid())),
                })
                .collect(),
            historico_order: Some(session.roster().names().to_vec()),
            data_salvamento: Some(SaveTimestampModel::from(saved_at).to_string()),
        }
    }

    /// Rebuilds a session without trusting anything beyond the structure:
    /// totals are recomputed, names must be unique and amounts valid, and
    /// the roster is made consistent with the people actually present.
    pub(crate) fn into_session(self) -> Result<Session, ServerError> {
        let mut ledger = Ledger::default();
        for p in self.pessoas {
            let name = p.nome.trim();
            if name.is_empty() {
                return Err(CorruptDocument::new("person with an empty 'nome'"));
            }
            let items = p
                .despesas
                .into_iter()
                .map(|e| {
                    Ok(LineItem {
                        raw_text: e.raw_line,
                        amount: to_amount(e.valor, "valor", name)?,
                    })
                })
                .collect::<Result<Vec<_>, ServerError>>()?;
            let paid = match p.pago {
                Some(v) => to_amount(v, "pago", name)?,
                None => Decimal::ZERO,
            };
            let person = Person {
                name: name.to_string(),
                items,
                paid,
            };
            ledger.insert_new(person).map_err(|_| {
                CorruptDocument::new(&format!("'{}' appears more than once", name))
            })?;
        }

        let roster = match self.historico_order {
            Some(order) => Self::sanitized_roster(&ledger, order),
            None => RosterOrder {
                names: ledger.people().map(|p| p.name().to_string()).collect(),
            },
        };

        // Informational only, an unreadable value does not fail the load.
        let last_saved = match self.data_salvamento.as_deref().map(SaveTimestampModel::from_str) {
            Some(Ok(t)) => Some(t.into()),
            Some(Err(_)) => {
                warn!(value = ?self.data_salvamento, "ignoring unreadable save timestamp");
                None
            }
            None => None,
        };

        Ok(Session::from_parts(ledger, roster, last_saved))
    }

    /// Keeps known names in the stored order, skipping unknown and repeated
    /// ones, then appends people the stored order forgot.
    fn sanitized_roster(ledger: &Ledger, order: Vec<String>) -> RosterOrder {
        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(ledger.len());
        for name in order {
            let name = name.trim().to_string();
            if !ledger.contains(&name) {
                warn!(person = %name, "dropping unknown name from history order");
                continue;
            }
            if !seen.insert(name.clone()) {
                warn!(person = %name, "dropping repeated name from history order");
                continue;
            }
            names.push(name);
        }
        for person in ledger.people() {
            if !seen.contains(person.name()) {
                warn!(person = %person.name(), "appending name missing from history order");
                names.push(person.name().to_string());
            }
        }
        RosterOrder { names }
    }
}
