mod output;

pub use output::{
    CorpusSummary, ExtraData, Header, OUTPUT_FORMAT_VERSION, Output, SystemEnvironment,
};
