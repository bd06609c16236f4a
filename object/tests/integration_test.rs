use dicomset_core::value::{PixelDataInfo, PrimitiveValue, Value};
use dicomset_core::{Length, Tag, VR};
use dicomset_dictionary_std::{tags, uids, StandardDataDictionary};
use dicomset_object::{
    new_element, new_element_with, new_sequence, query, read_data_set, read_data_set_from_file,
    write_data_set, write_data_set_to_file, write_data_set_with, DataSet, Element, ReadError,
    ReadOptions, SequenceLength, WriteOptions,
};
use dicomset_transfer_syntax_registry::TransferSyntaxRegistry;

const PRIVATE_TAG: Tag = Tag(0x0009, 0x1010);

fn instance(ts: &str) -> DataSet {
    let series: DataSet = vec![
        new_element(tags::SERIES_INSTANCE_UID, "1.2.3.4.5").unwrap(),
        new_element(tags::MODALITY, "CT").unwrap(),
    ]
    .into();
    vec![
        new_element(tags::TRANSFER_SYNTAX_UID, ts).unwrap(),
        new_element(tags::SOP_CLASS_UID, uids::CT_IMAGE_STORAGE).unwrap(),
        new_element(tags::SOP_INSTANCE_UID, "1.2.3.4.6").unwrap(),
        new_element(tags::STUDY_DATE, "20170928").unwrap(),
        new_sequence(tags::REFERENCED_SERIES_SEQUENCE, vec![series]),
        new_element_with(PRIVATE_TAG, VR::LO, "ACME").unwrap(),
        new_element(tags::PATIENT_NAME, "Doe^John").unwrap(),
        new_element(tags::PATIENT_ID, "7DkT2Tp").unwrap(),
        new_element(
            tags::STUDY_INSTANCE_UID,
            "1.2.840.113857.1907.192833.1115.220048",
        )
        .unwrap(),
        new_element(tags::ROWS, PrimitiveValue::from(2_u16)).unwrap(),
        new_element(tags::COLUMNS, PrimitiveValue::from(2_u16)).unwrap(),
        new_element_with(
            tags::PIXEL_DATA,
            VR::OW,
            PixelDataInfo::native(vec![1, 2, 3, 4, 5, 6, 7, 8]),
        )
        .unwrap(),
    ]
    .into()
}

fn round_trip(data_set: &DataSet) -> DataSet {
    let mut bytes = Vec::new();
    write_data_set(&mut bytes, data_set).unwrap();
    read_data_set(&bytes[..], ReadOptions::new()).unwrap()
}

fn string(data_set: &DataSet, tag: Tag) -> Option<&str> {
    data_set.element(tag).ok().and_then(|e| e.string())
}

fn check_common(read: &DataSet) {
    assert_eq!(string(read, tags::PATIENT_NAME), Some("Doe^John"));
    assert_eq!(string(read, tags::PATIENT_ID), Some("7DkT2Tp"));
    assert_eq!(string(read, tags::SOP_INSTANCE_UID), Some("1.2.3.4.6"));
    assert_eq!(
        read.element(tags::ROWS).unwrap().value(),
        &Value::Primitive(PrimitiveValue::from(2_u16))
    );

    let items = read
        .element(tags::REFERENCED_SERIES_SEQUENCE)
        .unwrap()
        .items()
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(string(&items[0], tags::MODALITY), Some("CT"));
    assert_eq!(string(&items[0], tags::SERIES_INSTANCE_UID), Some("1.2.3.4.5"));

    let pixel_data = read.element(tags::PIXEL_DATA).unwrap().pixel_data().unwrap();
    assert!(!pixel_data.encapsulated);
    assert_eq!(pixel_data.frames, vec![vec![1, 2, 3, 4, 5, 6, 7, 8]]);
}

#[test]
fn meta_group_is_completed() {
    let read = round_trip(&instance(uids::EXPLICIT_VR_LITTLE_ENDIAN));

    let meta: Vec<Tag> = read.meta_elements().map(|e| e.tag()).collect();
    assert_eq!(
        meta,
        vec![
            tags::FILE_META_INFORMATION_GROUP_LENGTH,
            tags::FILE_META_INFORMATION_VERSION,
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            tags::TRANSFER_SYNTAX_UID,
            tags::IMPLEMENTATION_CLASS_UID,
            tags::IMPLEMENTATION_VERSION_NAME,
        ]
    );
    assert_eq!(
        string(&read, tags::MEDIA_STORAGE_SOP_CLASS_UID),
        Some(uids::CT_IMAGE_STORAGE)
    );
    assert_eq!(
        string(&read, tags::IMPLEMENTATION_CLASS_UID),
        Some(dicomset_object::IMPLEMENTATION_CLASS_UID)
    );
    assert_eq!(
        read.transfer_syntax_uid(),
        Some(uids::EXPLICIT_VR_LITTLE_ENDIAN)
    );
    // meta elements come first
    assert!(read.iter().take(meta.len()).all(|e| e.tag().is_meta()));
}

#[test]
fn explicit_vr_little_endian_round_trip() {
    let read = round_trip(&instance(uids::EXPLICIT_VR_LITTLE_ENDIAN));
    check_common(&read);

    let private = read.element(PRIVATE_TAG).unwrap();
    assert_eq!(private.vr(), VR::LO);
    assert_eq!(private.string(), Some("ACME"));
}

#[test]
fn implicit_vr_little_endian_round_trip() {
    let read = round_trip(&instance(uids::IMPLICIT_VR_LITTLE_ENDIAN));
    check_common(&read);

    // private attributes are unknown to the dictionary
    let private = read.element(PRIVATE_TAG).unwrap();
    assert_eq!(private.vr(), VR::UN);
    assert_eq!(
        private.value(),
        &Value::Primitive(PrimitiveValue::from(b"ACME".to_vec()))
    );
}

#[test]
fn explicit_vr_big_endian_round_trip() {
    let read = round_trip(&instance(uids::EXPLICIT_VR_BIG_ENDIAN));
    check_common(&read);
}

#[test]
fn deflated_round_trip() {
    let original = instance(uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN);
    let mut bytes = Vec::new();
    write_data_set(&mut bytes, &original).unwrap();

    // the main data set is compressed
    assert!(!bytes.windows(8).any(|w| w == b"Doe^John"));

    let read = read_data_set(&bytes[..], ReadOptions::new()).unwrap();
    check_common(&read);
}

#[test]
fn transcoding_keeps_values() {
    let read = round_trip(&instance(uids::EXPLICIT_VR_LITTLE_ENDIAN));

    let mut transcoded = read.clone();
    transcoded.put(new_element(tags::TRANSFER_SYNTAX_UID, uids::EXPLICIT_VR_BIG_ENDIAN).unwrap());
    let read_again = round_trip(&transcoded);

    check_common(&read_again);
    assert_eq!(
        read_again.transfer_syntax_uid(),
        Some(uids::EXPLICIT_VR_BIG_ENDIAN)
    );
    let main = |ds: &DataSet| -> Vec<Element> {
        ds.iter().filter(|e| !e.tag().is_meta()).cloned().collect()
    };
    assert_eq!(main(&read), main(&read_again));
}

#[test]
fn replaced_values_are_written() {
    let mut data_set = round_trip(&instance(uids::EXPLICIT_VR_LITTLE_ENDIAN));
    let old = data_set.put(new_element(tags::PATIENT_NAME, "Roe^Richard Jr").unwrap());
    assert_eq!(old.and_then(|e| e.string().map(String::from)), Some("Doe^John".to_string()));

    let read = round_trip(&data_set);
    assert_eq!(string(&read, tags::PATIENT_NAME), Some("Roe^Richard Jr"));
    assert_eq!(string(&read, tags::PATIENT_ID), Some("7DkT2Tp"));
}

#[test]
fn sequences_of_defined_length() {
    let original = instance(uids::EXPLICIT_VR_LITTLE_ENDIAN);
    let mut bytes = Vec::new();
    write_data_set_with(
        &mut bytes,
        &original,
        WriteOptions::new().sequence_length(SequenceLength::Defined),
        &TransferSyntaxRegistry,
    )
    .unwrap();
    let read = read_data_set(&bytes[..], ReadOptions::new()).unwrap();
    check_common(&read);

    match read.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap().value() {
        Value::Sequence { size, .. } => assert!(size.is_defined()),
        value => panic!("expected a sequence, got {:?}", value),
    }
}

#[test]
fn nested_sequences() {
    let inner: DataSet = vec![new_element(tags::REFERENCED_SOP_CLASS_UID, "1.2.3").unwrap()].into();
    let outer: DataSet = vec![
        new_element(tags::MODALITY, "MR").unwrap(),
        new_sequence(tags::REFERENCED_SERIES_SEQUENCE, vec![inner.clone(), inner]),
    ]
    .into();
    let mut elements = instance(uids::IMPLICIT_VR_LITTLE_ENDIAN).into_elements();
    let at = elements
        .iter()
        .position(|e| e.tag() == tags::REFERENCED_SERIES_SEQUENCE)
        .unwrap();
    elements.insert(
        at,
        new_sequence(tags::REFERENCED_STUDY_SEQUENCE, vec![outer, DataSet::new()]),
    );
    let data_set = DataSet::from(elements);

    for length in [SequenceLength::Undefined, SequenceLength::Defined] {
        let mut bytes = Vec::new();
        write_data_set_with(
            &mut bytes,
            &data_set,
            WriteOptions::new().sequence_length(length),
            &TransferSyntaxRegistry,
        )
        .unwrap();
        let read = read_data_set(&bytes[..], ReadOptions::new()).unwrap();

        let studies = read
            .element(tags::REFERENCED_STUDY_SEQUENCE)
            .unwrap()
            .items()
            .unwrap();
        assert_eq!(studies.len(), 2);
        assert!(studies[1].is_empty());
        let series = studies[0]
            .element(tags::REFERENCED_SERIES_SEQUENCE)
            .unwrap()
            .items()
            .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(string(&series[1], tags::REFERENCED_SOP_CLASS_UID), Some("1.2.3"));
        assert_eq!(string(&studies[0], tags::MODALITY), Some("MR"));
    }
}

#[test]
fn encapsulated_pixel_data_round_trip() {
    let mut data_set = instance(uids::JPEG_BASELINE8_BIT);
    data_set.put(
        new_element_with(
            tags::PIXEL_DATA,
            VR::OB,
            PixelDataInfo::encapsulated(vec![vec![0xFF, 0xD8, 0xFF, 0xD9], vec![0xFF, 0xD9]]),
        )
        .unwrap(),
    );
    let read = round_trip(&data_set);

    let pixel_data = read.element(tags::PIXEL_DATA).unwrap().pixel_data().unwrap();
    assert!(pixel_data.encapsulated);
    assert_eq!(pixel_data.offset_table, vec![0, 12]);
    assert_eq!(
        pixel_data.frames,
        vec![vec![0xFF, 0xD8, 0xFF, 0xD9], vec![0xFF, 0xD9]]
    );
}

#[test]
fn read_options_filter_top_level() {
    let mut bytes = Vec::new();
    write_data_set(&mut bytes, &instance(uids::EXPLICIT_VR_LITTLE_ENDIAN)).unwrap();

    let read = read_data_set(
        &bytes[..],
        ReadOptions::new()
            .return_tags([tags::TRANSFER_SYNTAX_UID, tags::PATIENT_ID, tags::ROWS]),
    )
    .unwrap();
    let kept: Vec<Tag> = read.iter().map(|e| e.tag()).collect();
    assert_eq!(kept, vec![tags::TRANSFER_SYNTAX_UID, tags::PATIENT_ID, tags::ROWS]);

    let read = read_data_set(&bytes[..], ReadOptions::new().stop_at_tag(tags::PATIENT_ID)).unwrap();
    assert!(read.element(tags::PATIENT_NAME).is_ok());
    assert!(read.element(tags::PATIENT_ID).is_err());
    assert!(read.element(tags::PIXEL_DATA).is_err());

    let read = read_data_set(&bytes[..], ReadOptions::new().drop_pixel_data(true)).unwrap();
    let pixel_data = read.element(tags::PIXEL_DATA).unwrap().pixel_data().unwrap();
    assert!(pixel_data.frames.is_empty());
    assert!(read.element(PRIVATE_TAG).is_ok());
}

#[test]
fn query_written_data_set() {
    let read = round_trip(&instance(uids::EXPLICIT_VR_LITTLE_ENDIAN));

    let study_uid = "1.2.840.113857.1907.192833.1115.220048";
    let (matched, element) =
        query(&read, &new_element(tags::STUDY_INSTANCE_UID, study_uid).unwrap()).unwrap();
    assert!(matched);
    assert_eq!(element.and_then(|e| e.string()), Some(study_uid));

    let (matched, _) =
        query(&read, &new_element(tags::STUDY_DATE, "20170901-20171001").unwrap()).unwrap();
    assert!(matched);

    let (matched, element) =
        query(&read, &new_element(tags::PATIENT_BIRTH_DATE, "19700101").unwrap()).unwrap();
    assert!(!matched);
    assert!(element.is_none());
}

#[test]
fn write_and_read_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("instance.dcm");
    write_data_set_to_file(&path, &instance(uids::EXPLICIT_VR_LITTLE_ENDIAN)).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes[..128].iter().all(|b| *b == 0));
    assert_eq!(&bytes[128..132], b"DICM");

    let read = read_data_set_from_file(&path, ReadOptions::new()).unwrap();
    check_common(&read);

    let err = read_data_set_from_file(dir.path().join("missing.dcm"), ReadOptions::new())
        .unwrap_err();
    assert!(matches!(err, ReadError::OpenFile { .. }));
}

#[test]
fn truncated_file_is_an_error() {
    let mut bytes = Vec::new();
    write_data_set(&mut bytes, &instance(uids::EXPLICIT_VR_LITTLE_ENDIAN)).unwrap();
    bytes.truncate(bytes.len() - 3);

    let err = read_data_set(&bytes[..], ReadOptions::new()).unwrap_err();
    assert_eq!(err.tag(), Some(tags::PIXEL_DATA));
    assert!(err.position().is_some());
}

#[test]
fn describe_elements() {
    let read = round_trip(&instance(uids::EXPLICIT_VR_LITTLE_ENDIAN));
    let rows = read.element(tags::ROWS).unwrap();
    assert_eq!(
        rows.describe(&StandardDataDictionary),
        "(0028,0010)[Rows] US [2]"
    );
    assert_eq!(Length::UNDEFINED.get(), None);
}
