#[derive(Deserialize)]
pub struct PathParameters {
    pub id: i64,
}
