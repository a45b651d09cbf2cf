use super::*;

fn valid_draft() -> CustomerDraft {
    let mut draft = CustomerDraft::default();
    for action in [
        FormAction::SetName("Acme".to_owned()),
        FormAction::SetEmail("a@acme.test".to_owned()),
        FormAction::SetDeferralDays("30".to_owned()),
        FormAction::SetCreditLimit("1000".to_owned()),
        FormAction::SetOrg(OrgField::Name, "ООО Акме".to_owned()),
        FormAction::SetOrg(OrgField::Inn, "7701234567".to_owned()),
        FormAction::SetOrg(OrgField::Kpp, "770101001".to_owned()),
        FormAction::SetOrg(OrgField::Ogrn, "1027700132195".to_owned()),
        FormAction::SetOrg(OrgField::Addr, "Москва".to_owned()),
        FormAction::SetAccount(0, AccountField::Name, "Основной".to_owned()),
        FormAction::SetAccount(0, AccountField::AccountNumber, "40702810938000012345".to_owned()),
        FormAction::SetAccount(0, AccountField::Bik, "044525225".to_owned()),
        FormAction::SetAccount(0, AccountField::CorrAccountNumber, "30101810400000000225".to_owned()),
        FormAction::SetInvoiceEmail(0, "a@acme.test".to_owned()),
    ] {
        draft = draft.reduce(action);
    }
    draft
}

fn defaults(draft: &CustomerDraft) -> Vec<bool> {
    draft.bank_accounts.iter().map(|a| a.is_default).collect()
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_draft_has_one_default_account_and_one_email_slot() {
    let draft = CustomerDraft::default();
    assert_eq!(defaults(&draft), vec![true]);
    assert_eq!(draft.invoice_emails, vec![String::new()]);
    assert!(draft.metadata.is_empty());
}

// =============================================================
// Bank accounts
// =============================================================

#[test]
fn add_account_appends_non_default_blank() {
    let draft = CustomerDraft::default().reduce(FormAction::AddAccount).reduce(FormAction::AddAccount);
    assert_eq!(defaults(&draft), vec![true, false, false]);
    assert_eq!(draft.bank_accounts[2], BankAccountDraft::default());
}

#[test]
fn set_default_moves_exclusive_flag() {
    let draft = CustomerDraft::default()
        .reduce(FormAction::AddAccount)
        .reduce(FormAction::AddAccount)
        .reduce(FormAction::SetDefault(2));
    assert_eq!(defaults(&draft), vec![false, false, true]);

    let draft = draft.reduce(FormAction::SetDefault(1));
    assert_eq!(defaults(&draft), vec![false, true, false]);
}

#[test]
fn set_default_out_of_range_is_noop() {
    let before = CustomerDraft::default().reduce(FormAction::AddAccount);
    let after = before.clone().reduce(FormAction::SetDefault(7));
    assert_eq!(before, after);
}

#[test]
fn removing_default_account_reassigns_first() {
    let draft = CustomerDraft::default()
        .reduce(FormAction::AddAccount)
        .reduce(FormAction::AddAccount)
        .reduce(FormAction::SetAccount(2, AccountField::Name, "third".to_owned()))
        .reduce(FormAction::SetDefault(1))
        .reduce(FormAction::RemoveAccount(1));
    assert_eq!(defaults(&draft), vec![true, false]);
    assert_eq!(draft.bank_accounts[1].name, "third");
}

#[test]
fn removing_non_default_account_keeps_flag_and_order() {
    let draft = CustomerDraft::default()
        .reduce(FormAction::AddAccount)
        .reduce(FormAction::AddAccount)
        .reduce(FormAction::SetAccount(1, AccountField::Name, "second".to_owned()))
        .reduce(FormAction::SetAccount(2, AccountField::Name, "third".to_owned()))
        .reduce(FormAction::SetDefault(2))
        .reduce(FormAction::RemoveAccount(1));
    assert_eq!(defaults(&draft), vec![false, true]);
    assert_eq!(draft.bank_accounts[1].name, "third");
}

#[test]
fn first_account_cannot_be_removed() {
    let before = CustomerDraft::default().reduce(FormAction::AddAccount);
    assert!(!before.can_remove_account(0));
    assert!(before.can_remove_account(1));
    let after = before.clone().reduce(FormAction::RemoveAccount(0));
    assert_eq!(before, after);
}

#[test]
fn default_switch_locked_on_current_default() {
    let draft = CustomerDraft::default().reduce(FormAction::AddAccount);
    assert!(!draft.can_toggle_default(0));
    assert!(draft.can_toggle_default(1));

    let draft = draft.reduce(FormAction::SetDefault(1));
    assert!(draft.can_toggle_default(0));
    assert!(!draft.can_toggle_default(1));
    assert!(!draft.can_toggle_default(5));
}

#[test]
fn exactly_one_default_after_any_account_sequence() {
    let actions = [
        FormAction::AddAccount,
        FormAction::AddAccount,
        FormAction::SetDefault(2),
        FormAction::AddAccount,
        FormAction::RemoveAccount(2),
        FormAction::SetDefault(1),
        FormAction::RemoveAccount(0),
        FormAction::RemoveAccount(1),
        FormAction::SetDefault(9),
        FormAction::RemoveAccount(9),
        FormAction::AddAccount,
        FormAction::SetDefault(2),
        FormAction::RemoveAccount(2),
        FormAction::RemoveAccount(1),
    ];
    let mut draft = CustomerDraft::default();
    assert_eq!(draft.default_account_count(), 1);
    for action in actions {
        draft = draft.reduce(action.clone());
        assert_eq!(draft.default_account_count(), 1, "after {action:?}");
    }
    assert_eq!(draft.bank_accounts.len(), 1);
}

// =============================================================
// Invoice emails + metadata
// =============================================================

#[test]
fn first_invoice_email_cannot_be_removed() {
    let draft = CustomerDraft::default()
        .reduce(FormAction::SetInvoiceEmail(0, "a@x.test".to_owned()))
        .reduce(FormAction::RemoveInvoiceEmail(0));
    assert_eq!(draft.invoice_emails, vec!["a@x.test".to_owned()]);
    assert!(!draft.can_remove_invoice_email(0));
}

#[test]
fn later_invoice_emails_remove_independently() {
    let draft = CustomerDraft::default()
        .reduce(FormAction::AddInvoiceEmail)
        .reduce(FormAction::AddInvoiceEmail)
        .reduce(FormAction::SetInvoiceEmail(0, "a".to_owned()))
        .reduce(FormAction::SetInvoiceEmail(1, "b".to_owned()))
        .reduce(FormAction::SetInvoiceEmail(2, "c".to_owned()))
        .reduce(FormAction::RemoveInvoiceEmail(1));
    assert_eq!(draft.invoice_emails, vec!["a".to_owned(), "c".to_owned()]);

    let draft = draft.reduce(FormAction::RemoveInvoiceEmail(1));
    assert_eq!(draft.invoice_emails, vec!["a".to_owned()]);
}

#[test]
fn metadata_entries_add_edit_and_remove() {
    let draft = CustomerDraft::default()
        .reduce(FormAction::AddMetadata)
        .reduce(FormAction::AddMetadata)
        .reduce(FormAction::SetMetadataKey(0, "segment".to_owned()))
        .reduce(FormAction::SetMetadataValue(0, "retail".to_owned()))
        .reduce(FormAction::SetMetadataKey(1, "tier".to_owned()))
        .reduce(FormAction::RemoveMetadata(0));
    assert_eq!(draft.metadata, vec![MetadataDraft { key: "tier".to_owned(), value: String::new() }]);

    let draft = draft.reduce(FormAction::RemoveMetadata(0));
    assert!(draft.metadata.is_empty());
}

#[test]
fn reset_restores_initial_state() {
    let draft = valid_draft().reduce(FormAction::AddAccount).reduce(FormAction::Reset);
    assert_eq!(draft, CustomerDraft::default());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_draft_builds_request() {
    let request = valid_draft().validate().expect("valid");
    assert_eq!(request.name, "Acme");
    assert_eq!(request.email, "a@acme.test");
    assert_eq!(request.deferral_days, 30);
    assert!((request.balance.credit_limit - 1000.0).abs() < f64::EPSILON);
    assert_eq!(request.org.kpp, "770101001");
    assert_eq!(request.default_account_count(), 1);
    assert_eq!(request.invoice_emails, vec!["a@acme.test".to_owned()]);
    assert!(request.metadata.is_empty());
}

#[test]
fn empty_draft_reports_every_required_field_in_order() {
    let errors = CustomerDraft::default().validate().expect_err("empty draft");
    let fields: Vec<FieldPath> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields[0], FieldPath::Name);
    assert_eq!(fields[1], FieldPath::Email);
    assert_eq!(fields[2], FieldPath::DeferralDays);
    assert_eq!(fields[3], FieldPath::CreditLimit);
    assert_eq!(fields[4], FieldPath::Org(OrgField::Name));
    assert!(fields.contains(&FieldPath::Account(0, AccountField::Bik)));
    assert_eq!(fields.last(), Some(&FieldPath::InvoiceEmail(0)));
    assert_eq!(errors.len(), 4 + 5 + 4 + 1);
}

#[test]
fn whitespace_only_counts_as_missing() {
    let draft = valid_draft().reduce(FormAction::SetName("   ".to_owned()));
    let errors = draft.validate().expect_err("blank name");
    assert_eq!(errors, vec![FieldError { field: FieldPath::Name, message: "Введите Имя" }]);
}

#[test]
fn negative_or_fractional_deferral_days_rejected() {
    for raw in ["-1", "1.5", "abc", ""] {
        let errors = valid_draft()
            .reduce(FormAction::SetDeferralDays(raw.to_owned()))
            .validate()
            .expect_err(raw);
        assert_eq!(errors.len(), 1, "{raw}");
        assert_eq!(errors[0].field, FieldPath::DeferralDays);
    }
}

#[test]
fn credit_limit_accepts_zero_and_decimal_comma() {
    let request = valid_draft()
        .reduce(FormAction::SetCreditLimit("0".to_owned()))
        .validate()
        .expect("zero is allowed");
    assert!(request.balance.credit_limit.abs() < f64::EPSILON);

    let request = valid_draft()
        .reduce(FormAction::SetCreditLimit("1500,50".to_owned()))
        .validate()
        .expect("decimal comma");
    assert!((request.balance.credit_limit - 1500.5).abs() < f64::EPSILON);
}

#[test]
fn negative_credit_limit_rejected() {
    let errors = valid_draft()
        .reduce(FormAction::SetCreditLimit("-5".to_owned()))
        .validate()
        .expect_err("negative");
    assert_eq!(errors[0].field, FieldPath::CreditLimit);
}

#[test]
fn partially_filled_metadata_pair_is_flagged() {
    let errors = valid_draft()
        .reduce(FormAction::AddMetadata)
        .reduce(FormAction::SetMetadataKey(0, "segment".to_owned()))
        .validate()
        .expect_err("value missing");
    assert_eq!(errors, vec![FieldError { field: FieldPath::MetadataValue(0), message: "Введите значение" }]);
}

#[test]
fn added_account_fields_are_required() {
    let errors = valid_draft().reduce(FormAction::AddAccount).validate().expect_err("blank account");
    let fields: Vec<FieldPath> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        AccountField::ALL.iter().map(|f| FieldPath::Account(1, *f)).collect::<Vec<_>>()
    );
}

#[test]
fn values_are_trimmed_in_request() {
    let request = valid_draft()
        .reduce(FormAction::SetName("  Acme  ".to_owned()))
        .reduce(FormAction::AddMetadata)
        .reduce(FormAction::SetMetadataKey(0, " k ".to_owned()))
        .reduce(FormAction::SetMetadataValue(0, " v ".to_owned()))
        .validate()
        .expect("valid");
    assert_eq!(request.name, "Acme");
    assert_eq!(request.metadata, vec![MetadataEntry::new("k", "v")]);
}

#[test]
fn error_for_finds_message() {
    let errors = vec![FieldError { field: FieldPath::InvoiceEmail(1), message: "Введите Email" }];
    assert_eq!(error_for(&errors, FieldPath::InvoiceEmail(1)), Some("Введите Email"));
    assert_eq!(error_for(&errors, FieldPath::InvoiceEmail(0)), None);
}

#[test]
fn dom_ids_are_unique_per_field() {
    assert_eq!(FieldPath::Name.dom_id(), "customer-name");
    assert_eq!(FieldPath::Org(OrgField::Ogrn).dom_id(), "org-ogrn");
    assert_eq!(FieldPath::Account(2, AccountField::CorrAccountNumber).dom_id(), "account-2-corr-account-number");
    assert_eq!(FieldPath::InvoiceEmail(3).dom_id(), "invoice-email-3");
    assert_ne!(FieldPath::MetadataKey(0).dom_id(), FieldPath::MetadataValue(0).dom_id());
}

#[test]
fn every_field_belongs_to_its_form_section() {
    assert_eq!(FieldPath::CreditLimit.section_id(), "section-customer");
    assert_eq!(FieldPath::Org(OrgField::Kpp).section_id(), "section-org");
    assert_eq!(FieldPath::Account(2, AccountField::Bik).section_id(), "section-accounts");
    assert_eq!(FieldPath::InvoiceEmail(1).section_id(), "section-invoice-emails");
    assert_eq!(FieldPath::MetadataValue(0).section_id(), "section-metadata");
}

#[test]
fn first_error_of_a_collapsible_section_can_be_revealed() {
    let draft = CustomerDraft::default()
        .reduce(FormAction::SetName("Acme".to_owned()))
        .reduce(FormAction::SetEmail("a@acme.test".to_owned()))
        .reduce(FormAction::SetDeferralDays("0".to_owned()))
        .reduce(FormAction::SetCreditLimit("0".to_owned()));
    let errors = draft.validate().expect_err("org section empty");
    assert_eq!(errors[0].field.section_id(), "section-org");
}
