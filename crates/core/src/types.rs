/// Database primary key type (BIGSERIAL).
pub type DbId = i64;
