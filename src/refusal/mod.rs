pub mod codes;

pub use codes::{
    BadInputDetail, InvalidCheckDetail, RefusalBody, RefusalCode, RefusalDetail, RefusalEnvelope,
    build_envelope,
};
