//! Draft state for the create-customer form.
//!
//! DESIGN
//! ======
//! The draft is plain data driven by a pure reducer: every [`FormAction`]
//! consumes the old draft and returns the next one, re-establishing the
//! single-default-account invariant inside the same transition. Components
//! dispatch actions and never edit the lists directly, so the invariant can be
//! tested without mounting any UI.
//!
//! Inputs are kept as raw strings; [`CustomerDraft::validate`] is the only
//! place that parses numbers and produces a [`CreateCustomerRequest`].

#[cfg(test)]
#[path = "customer_form_test.rs"]
mod customer_form_test;

use crate::net::types::{CreateCustomerRequest, MetadataEntry, NewBalance, NewBankAccount, NewOrganization};

// =============================================================================
// DRAFT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrgDraft {
    pub name: String,
    pub inn: String,
    pub kpp: String,
    pub ogrn: String,
    pub addr: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BankAccountDraft {
    pub name: String,
    pub account_number: String,
    pub bik: String,
    pub corr_account_number: String,
    pub is_default: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataDraft {
    pub key: String,
    pub value: String,
}

/// Everything the user has typed into the create form so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub deferral_days: String,
    pub credit_limit: String,
    pub org: OrgDraft,
    pub bank_accounts: Vec<BankAccountDraft>,
    pub invoice_emails: Vec<String>,
    pub metadata: Vec<MetadataDraft>,
}

impl Default for CustomerDraft {
    /// One default bank account, one empty invoice email, no metadata.
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            deferral_days: String::new(),
            credit_limit: String::new(),
            org: OrgDraft::default(),
            bank_accounts: vec![BankAccountDraft { is_default: true, ..BankAccountDraft::default() }],
            invoice_emails: vec![String::new()],
            metadata: Vec::new(),
        }
    }
}

// =============================================================================
// FIELDS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrgField {
    Name,
    Inn,
    Kpp,
    Ogrn,
    Addr,
}

impl OrgField {
    pub const ALL: [Self; 5] = [Self::Name, Self::Inn, Self::Kpp, Self::Ogrn, Self::Addr];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Название организации",
            Self::Inn => "ИНН организации",
            Self::Kpp => "КПП организации",
            Self::Ogrn => "ОГРН организации",
            Self::Addr => "Юридический адрес",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Name => "Введите Название организации",
            Self::Inn => "Введите ИНН организации",
            Self::Kpp => "Введите КПП организации",
            Self::Ogrn => "Введите ОГРН организации",
            Self::Addr => "Введите Юридический адрес",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Inn => "inn",
            Self::Kpp => "kpp",
            Self::Ogrn => "ogrn",
            Self::Addr => "addr",
        }
    }
}

impl OrgDraft {
    #[must_use]
    pub fn get(&self, field: OrgField) -> &str {
        match field {
            OrgField::Name => &self.name,
            OrgField::Inn => &self.inn,
            OrgField::Kpp => &self.kpp,
            OrgField::Ogrn => &self.ogrn,
            OrgField::Addr => &self.addr,
        }
    }

    fn get_mut(&mut self, field: OrgField) -> &mut String {
        match field {
            OrgField::Name => &mut self.name,
            OrgField::Inn => &mut self.inn,
            OrgField::Kpp => &mut self.kpp,
            OrgField::Ogrn => &mut self.ogrn,
            OrgField::Addr => &mut self.addr,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountField {
    Name,
    AccountNumber,
    Bik,
    CorrAccountNumber,
}

impl AccountField {
    pub const ALL: [Self; 4] = [Self::Name, Self::AccountNumber, Self::Bik, Self::CorrAccountNumber];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Название счета",
            Self::AccountNumber => "Номер счета",
            Self::Bik => "БИК счета",
            Self::CorrAccountNumber => "Корр. номер счета",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Name => "Введите название счета",
            Self::AccountNumber => "Введите номер счета",
            Self::Bik => "Введите БИК счета",
            Self::CorrAccountNumber => "Введите Корр. номер счета",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::AccountNumber => "account-number",
            Self::Bik => "bik",
            Self::CorrAccountNumber => "corr-account-number",
        }
    }
}

impl BankAccountDraft {
    #[must_use]
    pub fn get(&self, field: AccountField) -> &str {
        match field {
            AccountField::Name => &self.name,
            AccountField::AccountNumber => &self.account_number,
            AccountField::Bik => &self.bik,
            AccountField::CorrAccountNumber => &self.corr_account_number,
        }
    }

    fn get_mut(&mut self, field: AccountField) -> &mut String {
        match field {
            AccountField::Name => &mut self.name,
            AccountField::AccountNumber => &mut self.account_number,
            AccountField::Bik => &mut self.bik,
            AccountField::CorrAccountNumber => &mut self.corr_account_number,
        }
    }
}

/// Addresses one input of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Name,
    Email,
    DeferralDays,
    CreditLimit,
    Org(OrgField),
    Account(usize, AccountField),
    InvoiceEmail(usize),
    MetadataKey(usize),
    MetadataValue(usize),
}

impl FieldPath {
    /// DOM id of the input, used to focus the first invalid field.
    #[must_use]
    pub fn dom_id(self) -> String {
        match self {
            Self::Name => "customer-name".to_owned(),
            Self::Email => "customer-email".to_owned(),
            Self::DeferralDays => "customer-deferral-days".to_owned(),
            Self::CreditLimit => "customer-credit-limit".to_owned(),
            Self::Org(field) => format!("org-{}", field.slug()),
            Self::Account(index, field) => format!("account-{index}-{}", field.slug()),
            Self::InvoiceEmail(index) => format!("invoice-email-{index}"),
            Self::MetadataKey(index) => format!("metadata-{index}-key"),
            Self::MetadataValue(index) => format!("metadata-{index}-value"),
        }
    }

    /// DOM id of the collapsible section holding the input.
    #[must_use]
    pub fn section_id(self) -> &'static str {
        match self {
            Self::Name | Self::Email | Self::DeferralDays | Self::CreditLimit => "section-customer",
            Self::Org(_) => "section-org",
            Self::Account(..) => "section-accounts",
            Self::InvoiceEmail(_) => "section-invoice-emails",
            Self::MetadataKey(_) | Self::MetadataValue(_) => "section-metadata",
        }
    }
}

/// A failed required-field rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldPath,
    pub message: &'static str,
}

/// Message for `field`, if it failed validation.
#[must_use]
pub fn error_for(errors: &[FieldError], field: FieldPath) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

// =============================================================================
// REDUCER
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    SetName(String),
    SetEmail(String),
    SetDeferralDays(String),
    SetCreditLimit(String),
    SetOrg(OrgField, String),
    AddAccount,
    RemoveAccount(usize),
    SetDefault(usize),
    SetAccount(usize, AccountField, String),
    AddInvoiceEmail,
    RemoveInvoiceEmail(usize),
    SetInvoiceEmail(usize, String),
    AddMetadata,
    RemoveMetadata(usize),
    SetMetadataKey(usize, String),
    SetMetadataValue(usize, String),
    Reset,
}

impl CustomerDraft {
    /// Apply one action and return the next draft.
    ///
    /// Out-of-range indices leave the draft unchanged. Exactly one bank
    /// account is default before and after every transition.
    #[must_use]
    pub fn reduce(mut self, action: FormAction) -> Self {
        match action {
            FormAction::SetName(v) => self.name = v,
            FormAction::SetEmail(v) => self.email = v,
            FormAction::SetDeferralDays(v) => self.deferral_days = v,
            FormAction::SetCreditLimit(v) => self.credit_limit = v,
            FormAction::SetOrg(field, v) => *self.org.get_mut(field) = v,
            FormAction::AddAccount => {
                let is_default = self.bank_accounts.is_empty();
                self.bank_accounts.push(BankAccountDraft { is_default, ..BankAccountDraft::default() });
            }
            FormAction::RemoveAccount(index) => {
                if self.can_remove_account(index) {
                    if self.bank_accounts[index].is_default {
                        self.make_default(0);
                    }
                    self.bank_accounts.remove(index);
                }
            }
            FormAction::SetDefault(index) => {
                if index < self.bank_accounts.len() {
                    self.make_default(index);
                }
            }
            FormAction::SetAccount(index, field, v) => {
                if let Some(account) = self.bank_accounts.get_mut(index) {
                    *account.get_mut(field) = v;
                }
            }
            FormAction::AddInvoiceEmail => self.invoice_emails.push(String::new()),
            FormAction::RemoveInvoiceEmail(index) => {
                if self.can_remove_invoice_email(index) {
                    self.invoice_emails.remove(index);
                }
            }
            FormAction::SetInvoiceEmail(index, v) => {
                if let Some(email) = self.invoice_emails.get_mut(index) {
                    *email = v;
                }
            }
            FormAction::AddMetadata => self.metadata.push(MetadataDraft::default()),
            FormAction::RemoveMetadata(index) => {
                if index < self.metadata.len() {
                    self.metadata.remove(index);
                }
            }
            FormAction::SetMetadataKey(index, v) => {
                if let Some(entry) = self.metadata.get_mut(index) {
                    entry.key = v;
                }
            }
            FormAction::SetMetadataValue(index, v) => {
                if let Some(entry) = self.metadata.get_mut(index) {
                    entry.value = v;
                }
            }
            FormAction::Reset => return Self::default(),
        }
        self
    }

    fn make_default(&mut self, index: usize) {
        for (i, account) in self.bank_accounts.iter_mut().enumerate() {
            account.is_default = i == index;
        }
    }

    /// The first account has no remove control.
    #[must_use]
    pub fn can_remove_account(&self, index: usize) -> bool {
        index > 0 && index < self.bank_accounts.len()
    }

    /// The default switch is locked on the account that currently holds it,
    /// so the flag can only move, never disappear.
    #[must_use]
    pub fn can_toggle_default(&self, index: usize) -> bool {
        self.bank_accounts.get(index).is_some_and(|a| !a.is_default)
    }

    /// The first invoice email has no remove control.
    #[must_use]
    pub fn can_remove_invoice_email(&self, index: usize) -> bool {
        index > 0 && index < self.invoice_emails.len()
    }

    #[must_use]
    pub fn default_account_count(&self) -> usize {
        self.bank_accounts.iter().filter(|a| a.is_default).count()
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Check every required field and build the create payload.
    ///
    /// # Errors
    ///
    /// Returns every failing field in on-screen order when any rule fails.
    pub fn validate(&self) -> Result<CreateCustomerRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = required(&mut errors, FieldPath::Name, &self.name, "Введите Имя");
        let email = required(&mut errors, FieldPath::Email, &self.email, "Введите Email");

        let deferral_days = self.deferral_days.trim().parse::<u32>().ok();
        if deferral_days.is_none() {
            errors.push(FieldError {
                field: FieldPath::DeferralDays,
                message: "Дней отсрочки должна быть больше или равна нулю",
            });
        }

        let credit_limit = parse_amount(&self.credit_limit);
        if credit_limit.is_none() {
            errors.push(FieldError {
                field: FieldPath::CreditLimit,
                message: "Кредитный лимит должен быть больше или равен нулю",
            });
        }

        let mut org = NewOrganization::default();
        for field in OrgField::ALL {
            let value = required(&mut errors, FieldPath::Org(field), self.org.get(field), field.message());
            match field {
                OrgField::Name => org.name = value,
                OrgField::Inn => org.inn = value,
                OrgField::Kpp => org.kpp = value,
                OrgField::Ogrn => org.ogrn = value,
                OrgField::Addr => org.addr = value,
            }
        }

        let mut bank_accounts = Vec::with_capacity(self.bank_accounts.len());
        for (index, draft) in self.bank_accounts.iter().enumerate() {
            let mut account = NewBankAccount { is_default: draft.is_default, ..NewBankAccount::default() };
            for field in AccountField::ALL {
                let value = required(&mut errors, FieldPath::Account(index, field), draft.get(field), field.message());
                match field {
                    AccountField::Name => account.name = value,
                    AccountField::AccountNumber => account.account_number = value,
                    AccountField::Bik => account.bik = value,
                    AccountField::CorrAccountNumber => account.corr_account_number = value,
                }
            }
            bank_accounts.push(account);
        }

        let invoice_emails = self
            .invoice_emails
            .iter()
            .enumerate()
            .map(|(index, email)| required(&mut errors, FieldPath::InvoiceEmail(index), email, "Введите Email"))
            .collect();

        let metadata = self
            .metadata
            .iter()
            .enumerate()
            .map(|(index, entry)| MetadataEntry {
                key: required(&mut errors, FieldPath::MetadataKey(index), &entry.key, "Введите ключ"),
                value: required(&mut errors, FieldPath::MetadataValue(index), &entry.value, "Введите значение"),
            })
            .collect();

        match (deferral_days, credit_limit) {
            (Some(deferral_days), Some(credit_limit)) if errors.is_empty() => Ok(CreateCustomerRequest {
                name,
                email,
                deferral_days,
                balance: NewBalance { credit_limit },
                org,
                bank_accounts,
                invoice_emails,
                metadata,
            }),
            _ => Err(errors),
        }
    }
}

/// Trimmed `value`, recording `message` when it is blank.
fn required(errors: &mut Vec<FieldError>, field: FieldPath, value: &str, message: &'static str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError { field, message });
    }
    trimmed.to_owned()
}

/// Non-negative finite amount; accepts a decimal comma.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
