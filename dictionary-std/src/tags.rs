//! Tag constants of a curated subset of the standard DICOM attributes,
//! as listed in DICOM PS3.6.

use dicomset_core::dictionary::{DataDictionaryEntryRef, TagRange::*};
use dicomset_core::header::{Tag, VR::*};

/// CommandGroupLength (0000,0000)
#[rustfmt::skip]
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// AffectedSOPClassUID (0000,0002)
#[rustfmt::skip]
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// CommandField (0000,0100)
#[rustfmt::skip]
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// Status (0000,0900)
#[rustfmt::skip]
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// FileMetaInformationGroupLength (0002,0000)
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001)
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002)
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003)
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010)
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012)
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013)
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016)
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle (0002,0017)
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle (0002,0018)
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// PrivateInformationCreatorUID (0002,0100)
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102)
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// DirectoryRecordSequence (0004,1220)
#[rustfmt::skip]
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// SpecificCharacterSet (0008,0005)
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008)
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012)
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013)
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// InstanceCreatorUID (0008,0014)
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// SOPClassUID (0008,0016)
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018)
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020)
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021)
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022)
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023)
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A)
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030)
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031)
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032)
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033)
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050)
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// QueryRetrieveLevel (0008,0052)
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// RetrieveAETitle (0008,0054)
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// InstanceAvailability (0008,0056)
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Modality (0008,0060)
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061)
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// ConversionType (0008,0064)
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer (0008,0070)
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080)
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081)
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// ReferringPhysicianName (0008,0090)
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// ReferringPhysicianIdentificationSequence (0008,0096)
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// CodeValue (0008,0100)
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102)
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104)
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// TimezoneOffsetFromUTC (0008,0201)
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// StationName (0008,1010)
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030)
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// ProcedureCodeSequence (0008,1032)
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription (0008,103E)
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// InstitutionalDepartmentName (0008,1040)
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// PerformingPhysicianName (0008,1050)
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// NameOfPhysiciansReadingStudy (0008,1060)
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// OperatorsName (0008,1070)
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// AdmittingDiagnosesDescription (0008,1080)
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// ManufacturerModelName (0008,1090)
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence (0008,1110)
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPerformedProcedureStepSequence (0008,1111)
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedSeriesSequence (0008,1115)
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedImageSequence (0008,1140)
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150)
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155)
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// DerivationDescription (0008,2111)
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// SourceImageSequence (0008,2112)
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// DerivationCodeSequence (0008,9215)
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// PatientName (0010,0010)
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020)
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021)
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030)
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032)
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040)
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// OtherPatientIDs (0010,1000)
#[rustfmt::skip]
pub const OTHER_PATIENT_I_DS: Tag = Tag(0x0010, 0x1000);
/// OtherPatientNames (0010,1001)
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// PatientAge (0010,1010)
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020)
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030)
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// PatientAddress (0010,1040)
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// EthnicGroup (0010,2160)
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// AdditionalPatientHistory (0010,21B0)
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// PregnancyStatus (0010,21C0)
#[rustfmt::skip]
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// PatientComments (0010,4000)
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// ContrastBolusAgent (0018,0010)
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// BodyPartExamined (0018,0015)
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanningSequence (0018,0020)
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// SequenceVariant (0018,0021)
#[rustfmt::skip]
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// ScanOptions (0018,0022)
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MRAcquisitionType (0018,0023)
#[rustfmt::skip]
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// SliceThickness (0018,0050)
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060)
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// RepetitionTime (0018,0080)
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// EchoTime (0018,0081)
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// EchoNumbers (0018,0086)
#[rustfmt::skip]
pub const ECHO_NUMBERS: Tag = Tag(0x0018, 0x0086);
/// MagneticFieldStrength (0018,0087)
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// SpacingBetweenSlices (0018,0088)
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// DataCollectionDiameter (0018,0090)
#[rustfmt::skip]
pub const DATA_COLLECTION_DIAMETER: Tag = Tag(0x0018, 0x0090);
/// EchoTrainLength (0018,0091)
#[rustfmt::skip]
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// PixelBandwidth (0018,0095)
#[rustfmt::skip]
pub const PIXEL_BANDWIDTH: Tag = Tag(0x0018, 0x0095);
/// DeviceSerialNumber (0018,1000)
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// DateOfSecondaryCapture (0018,1012)
#[rustfmt::skip]
pub const DATE_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1012);
/// TimeOfSecondaryCapture (0018,1014)
#[rustfmt::skip]
pub const TIME_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1014);
/// SecondaryCaptureDeviceManufacturer (0018,1016)
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER: Tag = Tag(0x0018, 0x1016);
/// SecondaryCaptureDeviceManufacturerModelName (0018,1018)
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x1018);
/// SecondaryCaptureDeviceSoftwareVersions (0018,1019)
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1019);
/// SoftwareVersions (0018,1020)
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030)
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ReconstructionDiameter (0018,1100)
#[rustfmt::skip]
pub const RECONSTRUCTION_DIAMETER: Tag = Tag(0x0018, 0x1100);
/// DistanceSourceToDetector (0018,1110)
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_DETECTOR: Tag = Tag(0x0018, 0x1110);
/// DistanceSourceToPatient (0018,1111)
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_PATIENT: Tag = Tag(0x0018, 0x1111);
/// GantryDetectorTilt (0018,1120)
#[rustfmt::skip]
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
/// TableHeight (0018,1130)
#[rustfmt::skip]
pub const TABLE_HEIGHT: Tag = Tag(0x0018, 0x1130);
/// RotationDirection (0018,1140)
#[rustfmt::skip]
pub const ROTATION_DIRECTION: Tag = Tag(0x0018, 0x1140);
/// ExposureTime (0018,1150)
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151)
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152)
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// FilterType (0018,1160)
#[rustfmt::skip]
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
/// ConvolutionKernel (0018,1210)
#[rustfmt::skip]
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
/// ReceiveCoilName (0018,1250)
#[rustfmt::skip]
pub const RECEIVE_COIL_NAME: Tag = Tag(0x0018, 0x1250);
/// FlipAngle (0018,1314)
#[rustfmt::skip]
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// PatientPosition (0018,5100)
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// SequenceOfUltrasoundRegions (0018,6011)
#[rustfmt::skip]
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// ContentQualification (0018,9004)
#[rustfmt::skip]
pub const CONTENT_QUALIFICATION: Tag = Tag(0x0018, 0x9004);
/// AcquisitionDuration (0018,9073)
#[rustfmt::skip]
pub const ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9073);
/// StudyInstanceUID (0020,000D)
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E)
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010)
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011)
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012)
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013)
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020)
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032)
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037)
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052)
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060)
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// TemporalPositionIdentifier (0020,0100)
#[rustfmt::skip]
pub const TEMPORAL_POSITION_IDENTIFIER: Tag = Tag(0x0020, 0x0100);
/// PositionReferenceIndicator (0020,1040)
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// SliceLocation (0020,1041)
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// NumberOfStudyRelatedSeries (0020,1206)
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_SERIES: Tag = Tag(0x0020, 0x1206);
/// NumberOfStudyRelatedInstances (0020,1208)
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1208);
/// NumberOfSeriesRelatedInstances (0020,1209)
#[rustfmt::skip]
pub const NUMBER_OF_SERIES_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1209);
/// ImageComments (0020,4000)
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// SamplesPerPixel (0028,0002)
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004)
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006)
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008)
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009)
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows (0028,0010)
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011)
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030)
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// PixelAspectRatio (0028,0034)
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// CorrectedImage (0028,0051)
#[rustfmt::skip]
pub const CORRECTED_IMAGE: Tag = Tag(0x0028, 0x0051);
/// BitsAllocated (0028,0100)
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101)
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102)
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103)
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106)
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107)
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// PixelPaddingValue (0028,0120)
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// WindowCenter (0028,1050)
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051)
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052)
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053)
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054)
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// WindowCenterWidthExplanation (0028,1055)
#[rustfmt::skip]
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// RedPaletteColorLookupTableDescriptor (0028,1101)
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// RedPaletteColorLookupTableData (0028,1201)
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// LossyImageCompression (0028,2110)
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio (0028,2112)
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// ModalityLUTSequence (0028,3000)
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// VOILUTSequence (0028,3010)
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// RequestingPhysician (0032,1032)
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// RequestedProcedureDescription (0032,1060)
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// PerformedProcedureStepStartDate (0040,0244)
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245)
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepID (0040,0253)
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// PerformedProcedureStepDescription (0040,0254)
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// RequestAttributesSequence (0040,0275)
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// RealWorldValueMappingSequence (0040,9096)
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// RelationshipType (0040,A010)
#[rustfmt::skip]
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// ValueType (0040,A040)
#[rustfmt::skip]
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// ConceptNameCodeSequence (0040,A043)
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// UID (0040,A124)
#[rustfmt::skip]
pub const UID: Tag = Tag(0x0040, 0xA124);
/// TextValue (0040,A160)
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// ContentSequence (0040,A730)
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// NumberOfSlices (0054,0081)
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// StorageMediaFileSetUID (0088,0140)
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// PresentationLUTShape (2050,0020)
#[rustfmt::skip]
pub const PRESENTATION_LUT_SHAPE: Tag = Tag(0x2050, 0x0020);
/// SharedFunctionalGroupsSequence (5200,9229)
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// PerFrameFunctionalGroupsSequence (5200,9230)
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// OverlayRows (6000,0010) (group `60xx`)
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns (6000,0011) (group `60xx`)
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// OverlayType (6000,0040) (group `60xx`)
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlayOrigin (6000,0050) (group `60xx`)
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// OverlayBitsAllocated (6000,0100) (group `60xx`)
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition (6000,0102) (group `60xx`)
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayData (6000,3000) (group `60xx`)
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// FloatPixelData (7FE0,0008)
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009)
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010)
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DigitalSignaturesSequence (FFFA,FFFA)
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding (FFFC,FFFC)
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(COMMAND_GROUP_LENGTH), alias: "CommandGroupLength", vr: UL },
    E { tag: Single(AFFECTED_SOP_CLASS_UID), alias: "AffectedSOPClassUID", vr: UI },
    E { tag: Single(COMMAND_FIELD), alias: "CommandField", vr: US },
    E { tag: Single(STATUS), alias: "Status", vr: US },
    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: UL },
    E { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: OB },
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: UI },
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: UI },
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: UI },
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: UI },
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: SH },
    E { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", vr: AE },
    E { tag: Single(SENDING_APPLICATION_ENTITY_TITLE), alias: "SendingApplicationEntityTitle", vr: AE },
    E { tag: Single(RECEIVING_APPLICATION_ENTITY_TITLE), alias: "ReceivingApplicationEntityTitle", vr: AE },
    E { tag: Single(PRIVATE_INFORMATION_CREATOR_UID), alias: "PrivateInformationCreatorUID", vr: UI },
    E { tag: Single(PRIVATE_INFORMATION), alias: "PrivateInformation", vr: OB },
    E { tag: Single(DIRECTORY_RECORD_SEQUENCE), alias: "DirectoryRecordSequence", vr: SQ },
    E { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: CS },
    E { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: CS },
    E { tag: Single(INSTANCE_CREATION_DATE), alias: "InstanceCreationDate", vr: DA },
    E { tag: Single(INSTANCE_CREATION_TIME), alias: "InstanceCreationTime", vr: TM },
    E { tag: Single(INSTANCE_CREATOR_UID), alias: "InstanceCreatorUID", vr: UI },
    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: UI },
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: UI },
    E { tag: Single(STUDY_DATE), alias: "StudyDate", vr: DA },
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: DA },
    E { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", vr: DA },
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: DA },
    E { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", vr: DT },
    E { tag: Single(STUDY_TIME), alias: "StudyTime", vr: TM },
    E { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: TM },
    E { tag: Single(ACQUISITION_TIME), alias: "AcquisitionTime", vr: TM },
    E { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: TM },
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: SH },
    E { tag: Single(QUERY_RETRIEVE_LEVEL), alias: "QueryRetrieveLevel", vr: CS },
    E { tag: Single(RETRIEVE_AE_TITLE), alias: "RetrieveAETitle", vr: AE },
    E { tag: Single(INSTANCE_AVAILABILITY), alias: "InstanceAvailability", vr: CS },
    E { tag: Single(MODALITY), alias: "Modality", vr: CS },
    E { tag: Single(MODALITIES_IN_STUDY), alias: "ModalitiesInStudy", vr: CS },
    E { tag: Single(CONVERSION_TYPE), alias: "ConversionType", vr: CS },
    E { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: LO },
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: LO },
    E { tag: Single(INSTITUTION_ADDRESS), alias: "InstitutionAddress", vr: ST },
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: PN },
    E { tag: Single(REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE), alias: "ReferringPhysicianIdentificationSequence", vr: SQ },
    E { tag: Single(CODE_VALUE), alias: "CodeValue", vr: SH },
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: SH },
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: LO },
    E { tag: Single(TIMEZONE_OFFSET_FROM_UTC), alias: "TimezoneOffsetFromUTC", vr: SH },
    E { tag: Single(STATION_NAME), alias: "StationName", vr: SH },
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: LO },
    E { tag: Single(PROCEDURE_CODE_SEQUENCE), alias: "ProcedureCodeSequence", vr: SQ },
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: LO },
    E { tag: Single(INSTITUTIONAL_DEPARTMENT_NAME), alias: "InstitutionalDepartmentName", vr: LO },
    E { tag: Single(PERFORMING_PHYSICIAN_NAME), alias: "PerformingPhysicianName", vr: PN },
    E { tag: Single(NAME_OF_PHYSICIANS_READING_STUDY), alias: "NameOfPhysiciansReadingStudy", vr: PN },
    E { tag: Single(OPERATORS_NAME), alias: "OperatorsName", vr: PN },
    E { tag: Single(ADMITTING_DIAGNOSES_DESCRIPTION), alias: "AdmittingDiagnosesDescription", vr: LO },
    E { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: LO },
    E { tag: Single(REFERENCED_STUDY_SEQUENCE), alias: "ReferencedStudySequence", vr: SQ },
    E { tag: Single(REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE), alias: "ReferencedPerformedProcedureStepSequence", vr: SQ },
    E { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", vr: SQ },
    E { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", vr: SQ },
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: UI },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: UI },
    E { tag: Single(DERIVATION_DESCRIPTION), alias: "DerivationDescription", vr: ST },
    E { tag: Single(SOURCE_IMAGE_SEQUENCE), alias: "SourceImageSequence", vr: SQ },
    E { tag: Single(DERIVATION_CODE_SEQUENCE), alias: "DerivationCodeSequence", vr: SQ },
    E { tag: Single(PATIENT_NAME), alias: "PatientName", vr: PN },
    E { tag: Single(PATIENT_ID), alias: "PatientID", vr: LO },
    E { tag: Single(ISSUER_OF_PATIENT_ID), alias: "IssuerOfPatientID", vr: LO },
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: DA },
    E { tag: Single(PATIENT_BIRTH_TIME), alias: "PatientBirthTime", vr: TM },
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: CS },
    E { tag: Single(OTHER_PATIENT_I_DS), alias: "OtherPatientIDs", vr: LO },
    E { tag: Single(OTHER_PATIENT_NAMES), alias: "OtherPatientNames", vr: PN },
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: AS },
    E { tag: Single(PATIENT_SIZE), alias: "PatientSize", vr: DS },
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: DS },
    E { tag: Single(PATIENT_ADDRESS), alias: "PatientAddress", vr: LO },
    E { tag: Single(ETHNIC_GROUP), alias: "EthnicGroup", vr: SH },
    E { tag: Single(ADDITIONAL_PATIENT_HISTORY), alias: "AdditionalPatientHistory", vr: LT },
    E { tag: Single(PREGNANCY_STATUS), alias: "PregnancyStatus", vr: US },
    E { tag: Single(PATIENT_COMMENTS), alias: "PatientComments", vr: LT },
    E { tag: Single(CONTRAST_BOLUS_AGENT), alias: "ContrastBolusAgent", vr: LO },
    E { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", vr: CS },
    E { tag: Single(SCANNING_SEQUENCE), alias: "ScanningSequence", vr: CS },
    E { tag: Single(SEQUENCE_VARIANT), alias: "SequenceVariant", vr: CS },
    E { tag: Single(SCAN_OPTIONS), alias: "ScanOptions", vr: CS },
    E { tag: Single(MR_ACQUISITION_TYPE), alias: "MRAcquisitionType", vr: CS },
    E { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: DS },
    E { tag: Single(KVP), alias: "KVP", vr: DS },
    E { tag: Single(REPETITION_TIME), alias: "RepetitionTime", vr: DS },
    E { tag: Single(ECHO_TIME), alias: "EchoTime", vr: DS },
    E { tag: Single(ECHO_NUMBERS), alias: "EchoNumbers", vr: IS },
    E { tag: Single(MAGNETIC_FIELD_STRENGTH), alias: "MagneticFieldStrength", vr: DS },
    E { tag: Single(SPACING_BETWEEN_SLICES), alias: "SpacingBetweenSlices", vr: DS },
    E { tag: Single(DATA_COLLECTION_DIAMETER), alias: "DataCollectionDiameter", vr: DS },
    E { tag: Single(ECHO_TRAIN_LENGTH), alias: "EchoTrainLength", vr: IS },
    E { tag: Single(PIXEL_BANDWIDTH), alias: "PixelBandwidth", vr: DS },
    E { tag: Single(DEVICE_SERIAL_NUMBER), alias: "DeviceSerialNumber", vr: LO },
    E { tag: Single(DATE_OF_SECONDARY_CAPTURE), alias: "DateOfSecondaryCapture", vr: DA },
    E { tag: Single(TIME_OF_SECONDARY_CAPTURE), alias: "TimeOfSecondaryCapture", vr: TM },
    E { tag: Single(SECONDARY_CAPTURE_DEVICE_MANUFACTURER), alias: "SecondaryCaptureDeviceManufacturer", vr: LO },
    E { tag: Single(SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME), alias: "SecondaryCaptureDeviceManufacturerModelName", vr: LO },
    E { tag: Single(SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS), alias: "SecondaryCaptureDeviceSoftwareVersions", vr: LO },
    E { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: LO },
    E { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", vr: LO },
    E { tag: Single(RECONSTRUCTION_DIAMETER), alias: "ReconstructionDiameter", vr: DS },
    E { tag: Single(DISTANCE_SOURCE_TO_DETECTOR), alias: "DistanceSourceToDetector", vr: DS },
    E { tag: Single(DISTANCE_SOURCE_TO_PATIENT), alias: "DistanceSourceToPatient", vr: DS },
    E { tag: Single(GANTRY_DETECTOR_TILT), alias: "GantryDetectorTilt", vr: DS },
    E { tag: Single(TABLE_HEIGHT), alias: "TableHeight", vr: DS },
    E { tag: Single(ROTATION_DIRECTION), alias: "RotationDirection", vr: CS },
    E { tag: Single(EXPOSURE_TIME), alias: "ExposureTime", vr: IS },
    E { tag: Single(X_RAY_TUBE_CURRENT), alias: "XRayTubeCurrent", vr: IS },
    E { tag: Single(EXPOSURE), alias: "Exposure", vr: IS },
    E { tag: Single(FILTER_TYPE), alias: "FilterType", vr: SH },
    E { tag: Single(CONVOLUTION_KERNEL), alias: "ConvolutionKernel", vr: SH },
    E { tag: Single(RECEIVE_COIL_NAME), alias: "ReceiveCoilName", vr: SH },
    E { tag: Single(FLIP_ANGLE), alias: "FlipAngle", vr: DS },
    E { tag: Single(PATIENT_POSITION), alias: "PatientPosition", vr: CS },
    E { tag: Single(SEQUENCE_OF_ULTRASOUND_REGIONS), alias: "SequenceOfUltrasoundRegions", vr: SQ },
    E { tag: Single(CONTENT_QUALIFICATION), alias: "ContentQualification", vr: CS },
    E { tag: Single(ACQUISITION_DURATION), alias: "AcquisitionDuration", vr: FD },
    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: UI },
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: UI },
    E { tag: Single(STUDY_ID), alias: "StudyID", vr: SH },
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: IS },
    E { tag: Single(ACQUISITION_NUMBER), alias: "AcquisitionNumber", vr: IS },
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: IS },
    E { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: CS },
    E { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: DS },
    E { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: DS },
    E { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: UI },
    E { tag: Single(LATERALITY), alias: "Laterality", vr: CS },
    E { tag: Single(TEMPORAL_POSITION_IDENTIFIER), alias: "TemporalPositionIdentifier", vr: IS },
    E { tag: Single(POSITION_REFERENCE_INDICATOR), alias: "PositionReferenceIndicator", vr: LO },
    E { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: DS },
    E { tag: Single(NUMBER_OF_STUDY_RELATED_SERIES), alias: "NumberOfStudyRelatedSeries", vr: IS },
    E { tag: Single(NUMBER_OF_STUDY_RELATED_INSTANCES), alias: "NumberOfStudyRelatedInstances", vr: IS },
    E { tag: Single(NUMBER_OF_SERIES_RELATED_INSTANCES), alias: "NumberOfSeriesRelatedInstances", vr: IS },
    E { tag: Single(IMAGE_COMMENTS), alias: "ImageComments", vr: LT },
    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: US },
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: CS },
    E { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", vr: US },
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: IS },
    E { tag: Single(FRAME_INCREMENT_POINTER), alias: "FrameIncrementPointer", vr: AT },
    E { tag: Single(ROWS), alias: "Rows", vr: US },
    E { tag: Single(COLUMNS), alias: "Columns", vr: US },
    E { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: DS },
    E { tag: Single(PIXEL_ASPECT_RATIO), alias: "PixelAspectRatio", vr: IS },
    E { tag: Single(CORRECTED_IMAGE), alias: "CorrectedImage", vr: CS },
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: US },
    E { tag: Single(BITS_STORED), alias: "BitsStored", vr: US },
    E { tag: Single(HIGH_BIT), alias: "HighBit", vr: US },
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: US },
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", vr: US },
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", vr: US },
    E { tag: Single(PIXEL_PADDING_VALUE), alias: "PixelPaddingValue", vr: US },
    E { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: DS },
    E { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: DS },
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: DS },
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: DS },
    E { tag: Single(RESCALE_TYPE), alias: "RescaleType", vr: LO },
    E { tag: Single(WINDOW_CENTER_WIDTH_EXPLANATION), alias: "WindowCenterWidthExplanation", vr: LO },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "RedPaletteColorLookupTableDescriptor", vr: US },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "RedPaletteColorLookupTableData", vr: OW },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", vr: CS },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_RATIO), alias: "LossyImageCompressionRatio", vr: DS },
    E { tag: Single(MODALITY_LUT_SEQUENCE), alias: "ModalityLUTSequence", vr: SQ },
    E { tag: Single(VOILUT_SEQUENCE), alias: "VOILUTSequence", vr: SQ },
    E { tag: Single(REQUESTING_PHYSICIAN), alias: "RequestingPhysician", vr: PN },
    E { tag: Single(REQUESTED_PROCEDURE_DESCRIPTION), alias: "RequestedProcedureDescription", vr: LO },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_DATE), alias: "PerformedProcedureStepStartDate", vr: DA },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_TIME), alias: "PerformedProcedureStepStartTime", vr: TM },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_ID), alias: "PerformedProcedureStepID", vr: SH },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_DESCRIPTION), alias: "PerformedProcedureStepDescription", vr: LO },
    E { tag: Single(REQUEST_ATTRIBUTES_SEQUENCE), alias: "RequestAttributesSequence", vr: SQ },
    E { tag: Single(REAL_WORLD_VALUE_MAPPING_SEQUENCE), alias: "RealWorldValueMappingSequence", vr: SQ },
    E { tag: Single(RELATIONSHIP_TYPE), alias: "RelationshipType", vr: CS },
    E { tag: Single(VALUE_TYPE), alias: "ValueType", vr: CS },
    E { tag: Single(CONCEPT_NAME_CODE_SEQUENCE), alias: "ConceptNameCodeSequence", vr: SQ },
    E { tag: Single(UID), alias: "UID", vr: UI },
    E { tag: Single(TEXT_VALUE), alias: "TextValue", vr: UT },
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", vr: SQ },
    E { tag: Single(NUMBER_OF_SLICES), alias: "NumberOfSlices", vr: US },
    E { tag: Single(STORAGE_MEDIA_FILE_SET_UID), alias: "StorageMediaFileSetUID", vr: UI },
    E { tag: Single(PRESENTATION_LUT_SHAPE), alias: "PresentationLUTShape", vr: CS },
    E { tag: Single(SHARED_FUNCTIONAL_GROUPS_SEQUENCE), alias: "SharedFunctionalGroupsSequence", vr: SQ },
    E { tag: Single(PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE), alias: "PerFrameFunctionalGroupsSequence", vr: SQ },
    E { tag: Group100(OVERLAY_ROWS), alias: "OverlayRows", vr: US },
    E { tag: Group100(OVERLAY_COLUMNS), alias: "OverlayColumns", vr: US },
    E { tag: Group100(OVERLAY_TYPE), alias: "OverlayType", vr: CS },
    E { tag: Group100(OVERLAY_ORIGIN), alias: "OverlayOrigin", vr: SS },
    E { tag: Group100(OVERLAY_BITS_ALLOCATED), alias: "OverlayBitsAllocated", vr: US },
    E { tag: Group100(OVERLAY_BIT_POSITION), alias: "OverlayBitPosition", vr: US },
    E { tag: Group100(OVERLAY_DATA), alias: "OverlayData", vr: OW },
    E { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", vr: OF },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", vr: OD },
    E { tag: Single(PIXEL_DATA), alias: "PixelData", vr: OW },
    E { tag: Single(DIGITAL_SIGNATURES_SEQUENCE), alias: "DigitalSignaturesSequence", vr: SQ },
    E { tag: Single(DATA_SET_TRAILING_PADDING), alias: "DataSetTrailingPadding", vr: OB },
];
