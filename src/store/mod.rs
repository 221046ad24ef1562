// src/store/mod.rs
//
// Camada de dados em memória. Substitui os repositórios de banco do
// restante do ecossistema: cada coleção é um Vec protegido por RwLock,
// semeado na inicialização (`seed`). Nada é persistido.

pub mod audit;
pub mod catalog;
pub mod consumption;
pub mod fleet;
pub mod inventory;
pub mod orders;
pub mod org;
pub mod purchases;
pub mod seed;
