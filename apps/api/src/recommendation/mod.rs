// Skill-matching and recommendation engine.
// normalizer → matcher → scorer → courses → ranker. No I/O below `handlers`.

pub mod courses;
pub mod handlers;
pub mod matcher;
pub mod normalizer;
pub mod ranker;
pub mod scorer;

pub use ranker::recommend;
