/// Key of the single persisted slot holding the serialized goal list.
pub const SNAPSHOT_KEY: &str = "hacks-anuais-data";

/// Current schema version of the persisted snapshot envelope.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 2;

/// Number of months an annual target is spread over.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Month names as shown on the monthly breakdown, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];
