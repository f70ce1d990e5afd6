pub mod seaorm;

pub use seaorm::SeaOrmUserRepository;
