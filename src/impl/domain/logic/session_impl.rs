use chrono::NaiveDateTime;
use fractic_server_error::ServerError;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    entities::{InvoiceReport, Ledger, PaymentRow, Person, RosterOrder, Session},
    errors::{
        DuplicatePersonName, EmptyInvoiceText, EmptyPersonName, InvalidPaymentAmount,
        PersonNotFound,
    },
};

use super::{amount_parser::AmountParser, invoice_processor::InvoiceProcessor};

fn normalized_name(name: &str) -> Result<&str, ServerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EmptyPersonName::new());
    }
    Ok(name)
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        ledger: Ledger,
        roster: RosterOrder,
        last_saved: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            ledger,
            roster,
            last_saved,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn roster(&self) -> &RosterOrder {
        &self.roster
    }

    pub fn last_saved(&self) -> Option<NaiveDateTime> {
        self.last_saved
    }

    pub(crate) fn mark_saved(&mut self, at: NaiveDateTime) {
        self.last_saved = Some(at);
    }

    pub fn person(&self, name: &str) -> Option<&Person> {
        self.ledger.get(name)
    }

    pub fn grand_total(&self) -> Decimal {
        self.ledger.grand_total()
    }

    /// People in roster order.
    pub fn people_in_order(&self) -> impl Iterator<Item = &Person> {
        let ledger = &self.ledger;
        self.roster
            .names()
            .iter()
            .filter_map(move |name| ledger.get(name))
    }

    /// Drops all people.
    pub fn clear(&mut self) {
        *self = Self::new();
        info!("cleared session");
    }

    /// Parses `text` line by line and makes the result the person's full
    /// expense list. An unknown name creates the person and appends it to the
    /// roster. Lines without a trailing amount are reported, not stored.
    pub fn process_invoice(
        &mut self,
        text: &str,
        person_name: &str,
    ) -> Result<InvoiceReport, ServerError> {
        let name = normalized_name(person_name)?;
        if text.trim().is_empty() {
            return Err(EmptyInvoiceText::new());
        }

        let batch = InvoiceProcessor::new(text).process();

        let created = !self.ledger.contains(name);
        if created {
            self.ledger.insert_new(Person::new(name))?;
            self.roster.push(name);
        }
        let person_total = self.ledger.replace_items(name, batch.items)?.total();
        let grand_total = self.ledger.grand_total();

        info!(
            person = name,
            created,
            items = batch.parsed.len(),
            invalid = batch.invalid_lines.len(),
            "processed invoice"
        );
        Ok(InvoiceReport {
            person: name.to_string(),
            created,
            items: batch.parsed,
            invalid_lines: batch.invalid_lines,
            person_total,
            grand_total,
        })
    }

    pub fn add_person(&mut self, name: &str) -> Result<(), ServerError> {
        let name = normalized_name(name)?;
        self.ledger.insert_new(Person::new(name))?;
        self.roster.push(name);
        info!(person = name, "added person");
        Ok(())
    }

    /// Moves a person to `index` in the roster, clamped to the valid range.
    /// Returns the index it ended up at.
    pub fn reorder(&mut self, name: &str, index: usize) -> Result<usize, ServerError> {
        let placed = self
            .roster
            .move_to(name, index)
            .ok_or_else(|| PersonNotFound::new(name))?;
        debug!(person = name, index = placed, "reordered roster");
        Ok(placed)
    }

    /// Roster names containing `needle` (case-insensitive). Read only.
    pub fn filter(&self, needle: &str) -> Vec<&str> {
        self.roster.filter(needle)
    }

    /// Renames a person in the ledger and in the roster. Items, payment and
    /// roster position are kept. Fails without changing anything if the new
    /// name is empty or belongs to someone else.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), ServerError> {
        let new = normalized_name(new)?;
        if !self.ledger.contains(old) {
            return Err(PersonNotFound::new(old));
        }
        if old == new {
            return Ok(());
        }
        if self.ledger.contains(new) {
            return Err(DuplicatePersonName::new(new));
        }
        self.ledger.rename(old, new)?;
        self.roster.rename(old, new);
        info!(from = old, to = new, "renamed person");
        Ok(())
    }

    /// Removes a person from the ledger and the roster. Returns `false` if
    /// there was no such person, which is not an error. Never fails.
    pub fn delete(&mut self, name: &str) -> Result<bool, ServerError> {
        let removed = self.ledger.remove(name).is_some();
        let unlisted = self.roster.remove(name);
        if removed || unlisted {
            info!(person = name, "deleted person");
        } else {
            debug!(person = name, "delete ignored, no such person");
        }
        Ok(removed)
    }

    /// Sets the amount paid so far (absolute, not incremental).
    pub fn set_paid(&mut self, name: &str, amount: Decimal) -> Result<(), ServerError> {
        let negative = amount.is_sign_negative() && !amount.is_zero();
        if negative || amount > AmountParser::max_amount() {
            return Err(InvalidPaymentAmount::new(&amount.to_string()));
        }
        self.ledger.set_paid(name, amount)?;
        info!(person = name, paid = %amount, "updated payment");
        Ok(())
    }

    /// The person's raw lines, one per line, ready to be edited and passed
    /// back to [`Session::edit_details`].
    pub fn detail_text(&self, name: &str) -> Result<String, ServerError> {
        let person = self
            .ledger
            .get(name)
            .ok_or_else(|| PersonNotFound::new(name))?;
        Ok(person
            .items()
            .iter()
            .map(|item| item.raw_text())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Re-parses an edited block and replaces the person's items with the
    /// result. Lines without a valid trailing amount are dropped. An empty
    /// block clears the list.
    pub fn edit_details(&mut self, name: &str, text: &str) -> Result<Decimal, ServerError> {
        if !self.ledger.contains(name) {
            return Err(PersonNotFound::new(name));
        }
        let batch = InvoiceProcessor::new(text).process();
        if !batch.invalid_lines.is_empty() {
            debug!(
                person = name,
                dropped = batch.invalid_lines.len(),
                "dropped lines without amount"
            );
        }
        let total = self.ledger.replace_items(name, batch.items)?.total();
        info!(person = name, total = %total, "edited details");
        Ok(total)
    }

    /// Rename and detail edit in one step. The rename is validated first, so
    /// a rejected name leaves the items untouched too.
    pub fn save_details(
        &mut self,
        old: &str,
        new_name: &str,
        text: &str,
    ) -> Result<Decimal, ServerError> {
        self.rename(old, new_name)?;
        self.edit_details(new_name.trim(), text)
    }

    /// Total, paid and outstanding amount per person, in roster order.
    pub fn payments(&self) -> Vec<PaymentRow> {
        self.people_in_order()
            .map(|person| PaymentRow {
                name: person.name().to_string(),
                total: person.total(),
                paid: person.paid(),
                balance: person.balance(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{domain::logic::amount_parser::AmountParser, entities::Session};

    const BLOCK: &str = "Pizza 1.234,56\nUber 12,50\nsem valor\nRefri 3,00";

    fn roster(session: &Session) -> Vec<&str> {
        session.roster().names().iter().map(String::as_str).collect()
    }

    /// Grand total recomputed from scratch, and roster/ledger agreement.
    fn assert_consistent(session: &Session) {
        let summed: Decimal = session
            .ledger()
            .people()
            .map(|p| p.items().iter().map(|i| i.amount()).sum::<Decimal>())
            .sum();
        assert_eq!(session.grand_total(), summed);
        assert_eq!(session.roster().len(), session.ledger().len());
        for name in session.roster().names() {
            assert!(session.ledger().contains(name), "{} not in ledger", name);
        }
    }

    #[test]
    fn process_invoice_reports_items_and_invalid_lines() {
        let mut session = Session::new();
        let report = session.process_invoice(BLOCK, "  Ana  ").unwrap();

        assert_eq!(report.person, "Ana");
        assert!(report.created);
        assert_eq!(report.items.len(), 3);
        assert_eq!(report.items[0].description, "Pizza");
        assert_eq!(report.items[0].amount, Decimal::new(123456, 2));
        assert_eq!(report.invalid_lines, vec!["sem valor".to_string()]);
        assert_eq!(report.person_total, Decimal::new(125006, 2));
        assert_eq!(report.grand_total, Decimal::new(125006, 2));
        assert_eq!(roster(&session), vec!["Ana"]);
        assert_consistent(&session);
    }

    #[test]
    fn reprocessing_replaces_instead_of_accumulating() {
        let mut session = Session::new();
        let once = session.process_invoice(BLOCK, "Ana").unwrap();
        let twice = session.process_invoice(BLOCK, "Ana").unwrap();

        assert!(!twice.created);
        assert_eq!(once.person_total, twice.person_total);
        assert_eq!(session.person("Ana").unwrap().items().len(), 3);
        assert_eq!(roster(&session), vec!["Ana"]);
    }

    #[test]
    fn process_invoice_rejects_bad_input_without_mutation() {
        let mut session = Session::new();
        assert!(session.process_invoice(BLOCK, "   ").is_err());
        assert!(session.process_invoice("  \n \n", "Ana").is_err());
        assert!(session.ledger().is_empty());
        assert!(session.roster().is_empty());
    }

    #[test]
    fn all_invalid_lines_still_create_person() {
        let mut session = Session::new();
        let report = session.process_invoice("nada aqui", "Ana").unwrap();
        assert!(report.items.is_empty());
        assert_eq!(report.person_total, Decimal::ZERO);
        assert!(session.person("Ana").is_some());
    }

    #[test]
    fn largest_amounts_add_up_without_overflow() {
        let mut session = Session::new();
        let report = session
            .process_invoice(
                "Carro 9.999.999.999.999,99\nOutro carro 9.999.999.999.999,99\n\
                 Casa 40.000.000.000.000.000.000.000.000.000,00",
                "Ana",
            )
            .unwrap();
        let doubled = AmountParser::max_amount() * Decimal::TWO;

        assert_eq!(report.items.len(), 2);
        assert_eq!(report.invalid_lines.len(), 1);
        assert_eq!(report.person_total, doubled);

        session
            .process_invoice(&"Moto 9.999.999.999.999,99\n".repeat(50), "Bia")
            .unwrap();
        session.set_paid("Bia", AmountParser::max_amount()).unwrap();
        assert_eq!(
            session.grand_total(),
            doubled + AmountParser::max_amount() * Decimal::from(50)
        );
        assert_consistent(&session);
    }

    #[test]
    fn add_person() {
        let mut session = Session::new();
        session.add_person(" Bia ").unwrap();
        assert!(session.add_person("Bia").is_err());
        assert!(session.add_person("").is_err());
        assert_eq!(roster(&session), vec!["Bia"]);
        assert_eq!(session.person("Bia").unwrap().total(), Decimal::ZERO);
    }

    #[test]
    fn rename_preserves_everything_but_the_name() {
        let mut session = Session::new();
        session.process_invoice("A 1,00", "Ana").unwrap();
        session.process_invoice("B 2,00", "Bia").unwrap();
        session.process_invoice("C 3,00", "Caio").unwrap();
        session.set_paid("Bia", Decimal::new(150, 2)).unwrap();

        session.rename("Bia", "  Beatriz ").unwrap();

        assert_eq!(roster(&session), vec!["Ana", "Beatriz", "Caio"]);
        let p = session.person("Beatriz").unwrap();
        assert_eq!(p.name(), "Beatriz");
        assert_eq!(p.total(), Decimal::new(200, 2));
        assert_eq!(p.paid(), Decimal::new(150, 2));
        assert_eq!(p.items()[0].raw_text(), "B 2,00");
        assert!(session.person("Bia").is_none());
        assert_consistent(&session);
    }

    #[test]
    fn rename_after_reorder_keeps_position() {
        let mut session = Session::new();
        for name in ["Ana", "Bia", "Caio"] {
            session.add_person(name).unwrap();
        }
        session.reorder("Caio", 0).unwrap();
        session.rename("Ana", "Aninha").unwrap();
        assert_eq!(roster(&session), vec!["Caio", "Aninha", "Bia"]);
    }

    #[test]
    fn rename_failures_leave_state_untouched() {
        let mut session = Session::new();
        session.process_invoice("A 1,00", "Ana").unwrap();
        session.process_invoice("B 2,00", "Bia").unwrap();
        let before = session.clone();

        assert!(session.rename("Ana", "Bia").is_err());
        assert!(session.rename("Ana", " ").is_err());
        assert!(session.rename("Zé", "José").is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut session = Session::new();
        for name in ["Ana", "Bia", "Caio"] {
            session.process_invoice("x 1,00", name).unwrap();
        }
        assert!(session.delete("Bia").unwrap());
        assert!(!session.delete("Bia").unwrap());
        assert!(!session.delete("Ninguém").unwrap());
        assert_eq!(roster(&session), vec!["Ana", "Caio"]);
        assert!(session.filter("bia").is_empty());
        assert_eq!(session.grand_total(), Decimal::new(200, 2));
        assert_consistent(&session);
    }

    #[test]
    fn reorder_unknown_name_fails() {
        let mut session = Session::new();
        session.add_person("Ana").unwrap();
        assert!(session.reorder("Bia", 0).is_err());
        assert_eq!(session.reorder("Ana", 10).unwrap(), 0);
    }

    #[test]
    fn filter_does_not_mutate() {
        let mut session = Session::new();
        for name in ["Mariana", "João", "Maria"] {
            session.add_person(name).unwrap();
        }
        assert_eq!(session.filter("MAR"), vec!["Mariana", "Maria"]);
        assert_eq!(roster(&session), vec!["Mariana", "João", "Maria"]);
    }

    #[test]
    fn edit_details_recomputes_from_scratch() {
        let mut session = Session::new();
        session.process_invoice(BLOCK, "Ana").unwrap();

        let text = session.detail_text("Ana").unwrap();
        assert_eq!(text, "Pizza 1.234,56\nUber 12,50\nRefri 3,00");

        let total = session
            .edit_details("Ana", "Uber 12,50\nRefri 3,0\nÁgua 2,00")
            .unwrap();
        assert_eq!(total, Decimal::new(1450, 2));
        assert_eq!(session.person("Ana").unwrap().items().len(), 2);
        assert_consistent(&session);

        assert_eq!(session.edit_details("Ana", "").unwrap(), Decimal::ZERO);
        assert!(session.edit_details("Bia", "x 1,00").is_err());
    }

    #[test]
    fn save_details_is_all_or_nothing() {
        let mut session = Session::new();
        session.process_invoice("A 1,00", "Ana").unwrap();
        session.process_invoice("B 2,00", "Bia").unwrap();

        assert!(session.save_details("Ana", "Bia", "Z 9,00").is_err());
        assert_eq!(session.person("Ana").unwrap().total(), Decimal::new(100, 2));

        let total = session.save_details("Ana", "Ana Clara", "Z 9,00").unwrap();
        assert_eq!(total, Decimal::new(900, 2));
        assert_eq!(roster(&session), vec!["Ana Clara", "Bia"]);
    }

    #[test]
    fn payments_follow_roster_order() {
        let mut session = Session::new();
        session.process_invoice("A 10,00", "Ana").unwrap();
        session.process_invoice("B 20,00", "Bia").unwrap();
        session.set_paid("Bia", Decimal::new(500, 2)).unwrap();
        session.set_paid("Bia", Decimal::new(700, 2)).unwrap();
        session.reorder("Bia", 0).unwrap();

        let rows = session.payments();
        assert_eq!(rows[0].name, "Bia");
        assert_eq!(rows[0].paid, Decimal::new(700, 2));
        assert_eq!(rows[0].balance, Decimal::new(1300, 2));
        assert_eq!(rows[1].name, "Ana");
        assert_eq!(rows[1].balance, Decimal::new(1000, 2));

        assert!(session.set_paid("Caio", Decimal::ONE).is_err());
        assert!(session.set_paid("Ana", Decimal::new(-1, 2)).is_err());
        assert!(session
            .set_paid("Ana", AmountParser::max_amount() + Decimal::new(1, 2))
            .is_err());
        assert_eq!(session.person("Ana").unwrap().paid(), Decimal::ZERO);
    }

    #[test]
    fn mixed_sequence_stays_consistent() {
        let mut session = Session::new();
        session.process_invoice("a 1,11\nb 2,22", "Ana").unwrap();
        session.process_invoice("c 3,33", "Bia").unwrap();
        assert_consistent(&session);
        session.rename("Ana", "Ana Paula").unwrap();
        assert_consistent(&session);
        session.process_invoice("d 4,44", "Caio").unwrap();
        session.edit_details("Bia", "e 0,01").unwrap();
        assert_consistent(&session);
        session.delete("Ana Paula").unwrap();
        assert_consistent(&session);
        assert_eq!(session.grand_total(), Decimal::new(445, 2));
    }

    #[test]
    fn clear_resets() {
        let mut session = Session::new();
        session.process_invoice("a 1,00", "Ana").unwrap();
        session.clear();
        assert_eq!(session, Session::new());
    }
}
