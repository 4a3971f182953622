// The path to the vba file within an xlsm or xlam file
pub const ZIP_VBA_PATH: &str = "xl/vbaProject.bin";

// Extensions of the Access database formats, where the whole file is the VBA blob
pub const FLAT_BLOB_EXTENSIONS: [&str; 2] = ["mdb", "accdb"];

// The stored DPB hash of the known password "0", written over whatever hash is in the file
pub const KNOWN_PASSWORD_DPB: &[u8] =
    b"0F0DA38BE78F04AC04ACFB5405ACB7F3C2613696189B7A52D119BCA91EC8FDBE9E59AEA82B9A46";

// Appended to the file stem of the unlocked copy
pub const UNLOCK_SUFFIX: &str = "_unlocked";
