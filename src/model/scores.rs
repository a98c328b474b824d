#[derive(Debug, Clone)]
pub struct ScoredUtterance {
    pub id: String,
    pub text: String,
    pub score: f64,
}
