use serde::{Deserialize, Serialize};

use crate::engine::Fill;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Buy,
    Sell,
    Deposit,
    Withdrawal,
}

// Write-once audit record, one per executed operation. Appended under the
// same account lock as the portfolio mutation it describes and never
// modified afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub kind: TransactionKind,
    pub symbol: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    pub total_amount: f64,
    pub realized_pnl: Option<f64>,
    pub executed_at: chrono::DateTime<chrono::Utc>,
}

impl Transaction {
    pub fn trade(user_id: uuid::Uuid, kind: TransactionKind, fill: &Fill) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            user_id,
            kind,
            symbol: Some(fill.symbol.clone()),
            quantity: Some(fill.quantity),
            price: Some(fill.price),
            total_amount: fill.total_amount,
            realized_pnl: fill.realized_pnl,
            executed_at: chrono::Utc::now(),
        }
    }

    pub fn cash_flow(user_id: uuid::Uuid, kind: TransactionKind, amount: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            user_id,
            kind,
            symbol: None,
            quantity: None,
            price: None,
            total_amount: amount,
            realized_pnl: None,
            executed_at: chrono::Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct OrderReceipt {
    pub order_id: uuid::Uuid,
    pub fill: Fill,
    pub cash_balance: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub count: usize,
    pub total: usize,
    pub page: usize,
    pub pages: usize,
    pub transactions: Vec<Transaction>,
}
