//! End-to-end scenarios for a booking form built from every field kind

use chrono::{Datelike, Duration, Local};
use formfield::{
    is_valid_input, AgencyIdField, BookingNrField, CheckboxField, Complaint, DateConfig,
    DateField, DatePattern, DateRange, EmailField, Form, FormConfig, FormField, GenderField,
    IbanField, IntField, PhoneField, PhonePrefix, RadioField, TextField, TextInput, TimeField,
    UserType, ValidationType,
};
use std::cell::RefCell;
use std::rc::Rc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn invalid() -> Complaint {
    Complaint::Kind(ValidationType::Invalid)
}

fn empty() -> Complaint {
    Complaint::Kind(ValidationType::Empty)
}

#[test]
fn test_constants() {
    let names: Vec<&str> = ValidationType::ALL.iter().map(|kind| kind.as_str()).collect();
    assert_eq!(
        names,
        vec!["empty", "invalid", "not-equal", "out-of-range", "not-unique"]
    );
    assert_eq!(UserType::Agency.to_string(), "agency");

    let config = DateConfig::default();
    assert!(config.patterns.contains_key("de"));
    assert!(config.patterns.contains_key("en"));
}

#[test]
fn test_aggregate_validity() {
    init_tracing();
    let mut age = IntField::new(true);
    let mut prename = TextField::new(true);
    let mut surname = TextField::new(true);

    age.validate("test");
    prename.validate("Fabian");
    surname.validate("Marcus");
    assert!(!is_valid_input([
        &mut age as &mut dyn FormField,
        &mut prename as &mut dyn FormField,
        &mut surname as &mut dyn FormField,
    ]));

    age.validate("23");
    assert!(is_valid_input([
        &mut age as &mut dyn FormField,
        &mut prename as &mut dyn FormField,
        &mut surname as &mut dyn FormField,
    ]));

    prename.validate("");
    assert!(!is_valid_input([
        &mut age as &mut dyn FormField,
        &mut prename as &mut dyn FormField,
        &mut surname as &mut dyn FormField,
    ]));

    prename.validate("Fabian");
    assert!(is_valid_input([
        &mut age as &mut dyn FormField,
        &mut prename as &mut dyn FormField,
        &mut surname as &mut dyn FormField,
    ]));
}

#[test]
fn test_booking_numbers() {
    let mut field = BookingNrField::new(true);
    for (input, complaint) in [
        ("", empty()),
        ("test", invalid()),
        ("123", invalid()),
        ("123456", Complaint::None),
    ] {
        field.validate(input);
        assert_eq!(field.value(), input);
        assert_eq!(field.complaint(), complaint, "input '{}'", input);
    }

    let mut optional = BookingNrField::new(false);
    optional.validate("");
    assert_eq!(optional.complaint(), Complaint::None);

    let mut hooked = BookingNrField::new(true).hook(|input, _| Some(format!("{}987", input)));
    hooked.validate("123456");
    assert_eq!(hooked.value(), "123456987");
}

#[test]
fn test_agency_ids() {
    let mut field = AgencyIdField::new(true);
    for (input, complaint) in [
        ("", empty()),
        ("test", invalid()),
        ("134", invalid()),
        ("123456", Complaint::None),
    ] {
        field.validate(input);
        assert_eq!(field.value(), input);
        assert_eq!(field.complaint(), complaint, "input '{}'", input);
    }

    let mut hooked = AgencyIdField::new(true).hook(|input, _| Some(format!("{}987", input)));
    hooked.validate("123456");
    assert_eq!(hooked.value(), "123456987");
}

#[test]
fn test_genders() {
    let mut field = GenderField::new(true);
    for (input, complaint) in [
        ("", empty()),
        ("test", invalid()),
        ("maennlich", Complaint::None),
        ("weiblich", Complaint::None),
    ] {
        field.validate(input);
        assert_eq!(field.value(), input);
        assert_eq!(field.complaint(), complaint, "input '{}'", input);
    }

    let mut hooked = GenderField::new(true).hook(|_, _| Some("divers".to_string()));
    hooked.validate("bla");
    assert_eq!(hooked.value(), "divers");
}

#[test]
fn test_phone_numbers() {
    init_tracing();
    let mut field = PhoneField::new(true);

    field.validate("b");
    assert_eq!(field.value(), "");
    assert_eq!(field.complaint(), Complaint::None);

    field.validate("");
    assert_eq!(field.value(), "");
    assert_eq!(field.complaint(), Complaint::Raised);

    field.validate("test");
    assert_eq!(field.value(), "");
    assert_eq!(field.complaint(), Complaint::Raised);

    field.validate("+49-123");
    assert_eq!(field.value(), "+49-123");
    assert_eq!(field.complaint(), Complaint::None);

    let mut optional = PhoneField::new(false);
    optional.validate("");
    assert_eq!(optional.complaint(), Complaint::None);
}

#[test]
fn test_phone_prefixes_from_config() {
    let prefixes = PhonePrefix::list_from_json(
        r#"[
            { "name": "Deutschland", "prefix": { "string": "+49", "number": 49 } },
            { "name": "Schweiz", "prefix": { "string": "+41", "number": 41 } }
        ]"#,
    )
    .unwrap();
    let field = PhoneField::new(true);

    assert!(field.has_valid_prefix("+41 44 123", &prefixes));
    assert!(!field.has_valid_prefix("+43 1 234", &prefixes));
    assert!(!field.has_valid_prefix("+490 30 123", &prefixes));
    // only the digit right after the prefix is checked
    assert!(field.has_valid_prefix("+49 030 123", &prefixes));
    assert!(field.has_valid_prefix("", &prefixes));
}

#[test]
fn test_emails() {
    let mut field = EmailField::new(true);
    let mut field2 = EmailField::new(false);

    field.validate("");
    assert_eq!(field.complaint(), empty());
    field.validate("123");
    assert_eq!(field.value(), "123");
    assert_eq!(field.complaint(), invalid());
    field.validate("f.marcus@phoenixreisen.com");
    assert_eq!(field.complaint(), Complaint::None);

    field.set_mirror(&field2);
    field2.validate("f.marvus@phoenixreisen.com");
    field.validate("f.marcus@phoenixreisen.com");
    assert_eq!(field.complaint(), Complaint::Kind(ValidationType::NotEqual));

    field2.validate("f.marcus@phoenixreisen.com");
    field.validate("f.marcus@phoenixreisen.com");
    assert_eq!(field.complaint(), Complaint::None);

    for input in [
        "fab,mar@phoenix.de",
        "fabian@phoenix,com",
        "fabian.com",
        "fabian@phoenix-com",
        "fabian@phoenix",
    ] {
        field2.validate(input);
        assert_eq!(field2.value(), input);
        assert_eq!(field2.complaint(), invalid(), "input '{}'", input);
    }

    field2.validate("");
    assert_eq!(field2.complaint(), Complaint::None);
}

#[test]
fn test_text_with_mirror() {
    let mut field = TextField::new(true);
    let mut field2 = TextField::new(false);

    field.validate("");
    field2.validate("");
    assert_eq!(field2.complaint(), Complaint::None);
    assert_eq!(field.complaint(), empty());

    field.validate(" ");
    assert_eq!(field.complaint(), empty());

    field.validate("hallo");
    assert_eq!(field.value(), "hallo");
    assert_eq!(field.complaint(), Complaint::None);

    field.set_mirror(&field2);
    field2.validate("phoenix reisen");
    field.validate("phönix reisen");
    assert_eq!(field.complaint(), Complaint::Kind(ValidationType::NotEqual));
    field.validate("phoenix reisen");
    assert_eq!(field.complaint(), Complaint::None);
}

#[test]
fn test_integers() {
    let mut field = IntField::new(true);
    for (input, complaint) in [
        ("", empty()),
        ("123t", invalid()),
        ("123", Complaint::None),
    ] {
        field.validate(input);
        assert_eq!(field.value(), input);
        assert_eq!(field.complaint(), complaint, "input '{}'", input);
    }
}

#[test]
fn test_german_dates() {
    let config = DateConfig::default();
    let mut field = DateField::new(true, &["de"], None, &config).unwrap();

    field.validate("");
    assert_eq!(field.value(), "");
    assert_eq!(field.complaint(), empty());

    for input in ["13.8.2019", "3.10.2019", "13.10.19", "2019-10-03"] {
        field.validate(input);
        assert_eq!(field.value(), input);
        assert_eq!(field.complaint(), invalid(), "input '{}'", input);
    }

    field.validate("04.07.2019");
    assert_eq!(field.complaint(), Complaint::None);
    assert_eq!(field.get_date().map(|date| date.year()), Some(2019));
}

#[test]
fn test_datepicker_dates() {
    let config = DateConfig::default();
    let today = Local::now().date_naive();
    let range = DateRange::between(today, today + Duration::days(5));

    let mut range_field = DateField::new(true, &["de"], Some(range), &config).unwrap();
    let mut field = DateField::new(true, &["de", "en"], None, &config).unwrap();
    let mut field2 = DateField::new(false, &["de"], None, &config).unwrap();

    field.validate("");
    field2.validate("");
    assert_eq!(field.value(), "");
    assert_eq!(field2.value(), "");
    assert!(!field2.complaint().is_raised());
    assert_eq!(field.complaint(), empty());

    for input in [
        "13.8.2019",
        "3.10.2019",
        "13.10.19",
        "19-10-03",
        "2019-10-3",
        "2019-7-10",
    ] {
        field.validate(input);
        assert_eq!(field.value(), input);
        assert_eq!(field.complaint(), invalid(), "input '{}'", input);
    }
    for input in ["04.07.2019", "2019-07-04"] {
        field.validate(input);
        assert_eq!(field.value(), input);
        assert!(!field.complaint().is_raised(), "input '{}'", input);
    }

    let german = DatePattern::parse("DD.MM.YYYY").unwrap();
    range_field.validate(&german.format(today - Duration::days(2)));
    assert_eq!(range_field.complaint(), Complaint::Kind(ValidationType::OutOfRange));
    range_field.validate(&german.format(today + Duration::days(2)));
    assert!(!range_field.complaint().is_raised());

    assert_eq!(field.get_date().map(|date| date.year()), Some(2019));
}

#[test]
fn test_times() {
    let mut field = TimeField::new(true);

    field.validate("");
    assert_eq!(field.complaint(), empty());

    for input in ["13.00", "4:00", "4", "12.3", "12:5"] {
        field.validate(input);
        assert_eq!(field.value(), input);
        assert_eq!(field.complaint(), invalid(), "input '{}'", input);
    }
    for input in ["12:00", "04:15", "07:08", "12:05"] {
        field.validate(input);
        assert_eq!(field.value(), input);
        assert_eq!(field.complaint(), Complaint::None, "input '{}'", input);
    }
}

#[test]
fn test_radio_buttons() {
    let mut field = RadioField::new(true);

    field.validate(None);
    assert_eq!(field.value(), None);
    assert_eq!(field.complaint(), Complaint::Raised);

    field.validate(Some("option 1"));
    assert_eq!(field.value().as_deref(), Some("option 1"));
    assert_eq!(field.complaint(), Complaint::None);
}

#[test]
fn test_checkboxes() {
    let mut field = CheckboxField::new(true);

    field.validate(None::<&str>);
    assert!(!field.value());
    assert_eq!(field.complaint(), Complaint::Raised);

    field.validate(Some("option 1"));
    assert!(field.value());
    assert_eq!(field.complaint(), Complaint::None);
}

#[test]
fn test_ibans() {
    let mut field = IbanField::new(true);

    field.validate("");
    assert_eq!(field.value(), "");
    assert_eq!(field.complaint(), empty());

    field.validate("DE02500105170137075031");
    assert_eq!(field.value(), "DE02500105170137075031");
    assert_eq!(field.complaint(), invalid());

    field.validate("DE02500105170137075030");
    assert_eq!(field.value(), "DE02500105170137075030");
    assert_eq!(field.complaint(), Complaint::None);

    let mut input = TextInput::new("EN02500105170137075030");
    field.format(&mut input);
    assert!(field.value().contains(' '));
    assert_eq!(field.complaint(), invalid());
}

#[test]
fn test_booking_form() {
    init_tracing();
    let config = FormConfig::from_yaml_str(
        "date:\n  patterns:\n    de: \"DD.MM.YYYY\"\n",
    )
    .unwrap();

    let mut email = EmailField::new(true);
    let mut repeat = EmailField::new(true);
    repeat.set_mirror(&email);
    email.validate("f.marcus@phoenixreisen.com");
    repeat.validate("f.marcus@phoenixreisen.de");

    let mut form = Form::new()
        .field("bookingnr", BookingNrField::new(true))
        .field("gender", GenderField::new(true))
        .field(
            "birthday",
            DateField::new(true, &["de"], None, &config.date).unwrap(),
        )
        .field("email", email)
        .field("email_repeat", repeat)
        .field("terms", CheckboxField::new(true));

    let errors = form.check().unwrap_err();
    assert_eq!(errors.len(), 5);
    assert!(errors.has_field_errors("email_repeat"));
    assert!(!errors.has_field_errors("email"));
    assert_eq!(
        errors.get_field_errors("terms").unwrap()[0].code,
        "required"
    );
    let payload = errors.to_json();
    assert_eq!(payload["error"]["code"], "validation_failed");
    assert_eq!(
        payload["error"]["fields"]["birthday"][0]["code"],
        "empty"
    );

    form.get_mut::<BookingNrField>("bookingnr")
        .unwrap()
        .validate("123456");
    form.get_mut::<GenderField>("gender").unwrap().validate("Frau");
    form.get_mut::<DateField>("birthday")
        .unwrap()
        .validate("04.07.1985");
    form.get_mut::<EmailField>("email_repeat")
        .unwrap()
        .validate("f.marcus@phoenixreisen.com");
    form.get_mut::<CheckboxField>("terms").unwrap().validate(true);

    assert!(form.is_valid());
    assert_eq!(form.first_error(), None);
}

#[test]
fn test_value_cells_drive_dependent_state() {
    let mut prename = TextField::new(true);
    let greeting = Rc::new(RefCell::new(String::new()));

    let sink = Rc::clone(&greeting);
    let id = prename
        .cell()
        .subscribe(move |name: &String| *sink.borrow_mut() = format!("Hallo {}", name));

    prename.validate("Fabian");
    assert_eq!(*greeting.borrow(), "Hallo Fabian");

    assert!(prename.cell().unsubscribe(id));
    prename.validate("Marcus");
    assert_eq!(*greeting.borrow(), "Hallo Fabian");
}
