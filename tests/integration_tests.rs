use cgpa_calc::catalog::Catalog;
use cgpa_calc::grading::{compute_cgpa, grade_label, grade_point, score_card};
use cgpa_calc::marks::{Field, MarkStore};
use cgpa_calc::output::{ExportFormat, export, pdf_bytes, render_table};
use cgpa_calc::session::Session;
use cgpa_calc::settings::{JsonFileSettings, SettingsStore, Theme};
use std::env;
use std::fs;

#[test]
fn test_full_pipeline() {
    let catalog = Catalog::default();
    let mut session = Session::new(&catalog);

    let scores = [
        ("OBA1101", "28", "66"),
        ("OBA1102", "24", "58"),
        ("OBA1103", "21", "52"),
        ("OBA1104", "18", "45"),
        ("OBA1105", "15", "42"),
        ("OBA1106", "12", "40"),
        ("OBA1107", "10", "30"),
        ("OBA1108", "", ""),
    ];
    for (code, internal, external) in scores {
        session.set_mark(code, Field::Internal, internal);
        session.set_mark(code, Field::External, external);
    }

    // 10 + 9 + 8 + 7 + 6 + 5 + 0 + 0 = 45 points, 3 credits each: 135 / 24 = 5.625
    assert_eq!(session.cgpa(), "5.63");

    let card = session.score_card();
    let grades: Vec<_> = card.courses.iter().map(|c| c.grade.label()).collect();
    assert_eq!(grades, ["O", "A+", "A", "B+", "B", "C", "F", "F"]);
    assert_eq!(card.passed_count(), 6);
    assert!(render_table(&card).contains("CGPA: 5.63"));
}

#[test]
fn test_mixed_pass_fail_scenario() {
    let catalog = Catalog::default();
    let mut marks = MarkStore::new(&catalog);

    for (i, course) in catalog.courses().iter().enumerate() {
        let (internal, external) = if i % 2 == 0 { ("30", "65") } else { ("15", "30") };
        marks.set_mark(&course.code, Field::Internal, internal);
        marks.set_mark(&course.code, Field::External, external);
    }

    assert_eq!(compute_cgpa(&catalog, &marks), "5.00");
    assert_eq!(compute_cgpa(&catalog, &marks), compute_cgpa(&catalog, &marks));
}

#[test]
fn test_label_and_point_consistency() {
    let pairs = [(89, "A+", 9), (49, "F", 0), (55, "B", 6), (90, "O", 10), (59, "B", 6)];
    for (total, label, point) in pairs {
        assert_eq!(grade_label(total), label);
        assert_eq!(grade_point(total), point);
    }
}

#[test]
fn test_exports_to_disk() {
    let catalog = Catalog::default();
    let mut marks = MarkStore::new(&catalog);
    marks.set_mark("OBA1108", Field::Internal, "29");
    marks.set_mark("OBA1108", Field::External, "69");
    let card = score_card(&catalog, &marks);

    let dir = env::temp_dir();
    let pdf = dir.join("cgpa_calc_it_card.pdf").display().to_string();
    let csv = dir.join("cgpa_calc_it_card.csv").display().to_string();

    export(&pdf, ExportFormat::Pdf, &card).unwrap();
    export(&csv, ExportFormat::Csv, &card).unwrap();

    assert!(fs::read(&pdf).unwrap().starts_with(b"%PDF"));
    assert!(pdf_bytes(&card).unwrap().len() > 100);
    let content = fs::read_to_string(&csv).unwrap();
    assert!(content.contains("OBA1108,R Programming,3,29,69,98,O,10,PASS,1.25"));

    fs::remove_file(&pdf).unwrap();
    fs::remove_file(&csv).unwrap();
}

#[test]
fn test_theme_persists_across_stores() {
    let path = env::temp_dir().join("cgpa_calc_it_settings.json");
    let _ = fs::remove_file(&path);

    assert_eq!(JsonFileSettings::new(&path).theme(), Theme::Dark);
    JsonFileSettings::new(&path).toggle().unwrap();
    assert_eq!(JsonFileSettings::new(&path).theme(), Theme::Light);

    fs::remove_file(&path).unwrap();
}
