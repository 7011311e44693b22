//! Library-boundary tests: generated files fed back through the parser.
//!
//! Generation computes every control record; these tests check that a
//! re-parse sees exactly the computed totals, hashes, and padding.

use nacha_codec::{
    generate, parse, AddendaRecord, BatchHeader, Cents, EntryDetail, FileHeader, RECORD_LEN,
};

fn file_header(blocking_factor: u32) -> FileHeader {
    FileHeader {
        priority_code: "01".to_string(),
        immediate_destination: "076401251".to_string(),
        immediate_origin: "123456789".to_string(),
        creation_date: "250801".to_string(),
        creation_time: "0930".to_string(),
        file_id_modifier: "A".to_string(),
        record_size: "094".to_string(),
        blocking_factor,
        format_code: "1".to_string(),
        destination_name: "FIRST PLATYPUS BANK".to_string(),
        origin_name: "ACME PAYROLL LLC".to_string(),
        reference_code: String::new(),
    }
}

fn batch_header(number: u32) -> BatchHeader {
    BatchHeader {
        service_class_code: "200".to_string(),
        company_name: "ACME PAYROLL LLC".to_string(),
        company_id: "1234567890".to_string(),
        standard_entry_class: "PPD".to_string(),
        entry_description: "PAYROLL".to_string(),
        effective_entry_date: "250804".to_string(),
        originator_status: "1".to_string(),
        originating_dfi: "07640125".to_string(),
        batch_number: number,
        ..Default::default()
    }
}

fn entry(code: &str, dfi: &str, cents: i64) -> EntryDetail {
    EntryDetail {
        transaction_code: code.to_string(),
        receiving_dfi: dfi.to_string(),
        check_digit: "5".to_string(),
        account_number: "00123456789".to_string(),
        amount: Cents::new(cents),
        individual_id: "EMP001".to_string(),
        individual_name: "JANE DOE".to_string(),
        addenda_indicator: "0".to_string(),
        trace_number: "076401250000001".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_roundtrip_totals_and_hash() {
    let batches = vec![
        (
            batch_header(1),
            vec![
                entry("22", "07640125", 1000),
                entry("27", "07640125", -250),
                // outside the documented code table: counted, not totaled
                entry("99", "07640125", 555),
            ],
        ),
        (batch_header(2), vec![entry("27", "07640125", -4999)]),
    ];

    let text = generate(&file_header(10), &batches).unwrap();
    let document = parse(&text);

    assert!(document.diagnostics.is_empty());
    assert_eq!(document.batches.len(), 2);

    let control = document.control.as_ref().unwrap();
    assert_eq!(control.total_credit, Cents::new(1000));
    assert_eq!(control.total_debit, Cents::new(250 + 4999));
    assert_eq!(control.entry_addenda_count, 4);
    assert_eq!(control.batch_count, 2);
    // 4 * 7640125, well under the ten-billion modulus
    assert_eq!(control.entry_hash, 30_560_500);

    let first = document.batches[0].control.as_ref().unwrap();
    assert_eq!(first.entry_addenda_count, 3);
    assert_eq!(first.entry_hash, 22_920_375);
    assert_eq!(first.total_debit, Cents::new(250));
    assert_eq!(first.total_credit, Cents::new(1000));
}

#[test]
fn test_roundtrip_preserves_structure() {
    let mut invoiced = entry("22", "07640125", 1000);
    invoiced.addenda_indicator = "1".to_string();
    invoiced.addenda.push(AddendaRecord {
        type_code: "05".to_string(),
        payment_info: "INVOICE 8812 PARTIAL PAYMENT".to_string(),
        sequence_number: 1,
        entry_sequence_number: 1,
    });

    let batches = vec![(batch_header(1), vec![invoiced, entry("27", "07640125", -250)])];
    let text = generate(&file_header(10), &batches).unwrap();
    let document = parse(&text);

    let header = document.header.as_ref().unwrap();
    assert_eq!(header.destination_name, "FIRST PLATYPUS BANK");
    assert_eq!(header.blocking_factor, 10);

    let batch = &document.batches[0];
    assert_eq!(batch.header.company_name, "ACME PAYROLL LLC");
    assert_eq!(batch.header.standard_entry_class, "PPD");
    assert_eq!(batch.entries.len(), 2);

    let addenda = &batch.entries[0].addenda;
    assert_eq!(addenda.len(), 1);
    assert_eq!(addenda[0].payment_info, "INVOICE 8812 PARTIAL PAYMENT");
    assert_eq!(addenda[0].entry_sequence_number, 1);

    assert_eq!(batch.entries[1].amount, Cents::new(-250));
}

#[test]
fn test_roundtrip_block_padding() {
    // 13 content lines with factor 10: 7 filler lines, 2 blocks.
    let entries: Vec<EntryDetail> = (0..9).map(|_| entry("22", "07640125", 100)).collect();
    let text = generate(&file_header(10), &[(batch_header(1), entries)]).unwrap();

    assert_eq!(text.lines().count(), 20);
    for line in text.lines() {
        assert_eq!(line.chars().count(), RECORD_LEN);
    }

    let document = parse(&text);
    assert!(document.diagnostics.is_empty());
    assert_eq!(document.padding_lines, 7);
    assert_eq!(document.control.as_ref().unwrap().block_count, 2);
}

#[test]
fn test_roundtrip_of_reparsed_document_is_stable() {
    let batches = vec![(
        batch_header(1),
        vec![entry("22", "07640125", 1000), entry("27", "07640125", -250)],
    )];
    let first = generate(&file_header(10), &batches).unwrap();

    let document = parse(&first);
    let header = document.header.unwrap();
    let reparsed: Vec<_> = document
        .batches
        .into_iter()
        .map(|batch| (batch.header, batch.entries))
        .collect();
    let second = generate(&header, &reparsed).unwrap();

    assert_eq!(first, second);
}
