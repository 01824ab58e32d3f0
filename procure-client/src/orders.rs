use crate::client::ApiClient;
use crate::error::ClientResult;
use procure_model::{
    NewPurchaseOrder, OrderStatus, OrderStatusUpdate, Proposal, PurchaseOrder, PurchaseOrderId, Role,
};
use tracing::info;

impl ApiClient {
    pub async fn list_purchase_orders(&self) -> ClientResult<Vec<PurchaseOrder>> {
        self.get("/purchase-orders").await
    }

    pub async fn get_purchase_order(&self, id: PurchaseOrderId) -> ClientResult<PurchaseOrder> {
        self.get(&format!("/purchase-orders/{id}")).await
    }

    /// Places an order for an approved proposal. Requires the purchaser role.
    pub async fn create_purchase_order(&self, proposal: &Proposal) -> ClientResult<PurchaseOrder> {
        self.require_role(Role::Purchaser)?;
        let order = NewPurchaseOrder::from_proposal(proposal)?;
        let created: PurchaseOrder = self.post("/purchase-orders", &order).await?;
        info!("Created purchase order {} for proposal {}", created.id, proposal.id);
        Ok(created)
    }

    /// Moves an order along its delivery workflow. Requires the purchaser role.
    pub async fn set_order_status(&self, order: &PurchaseOrder, to: OrderStatus) -> ClientResult<PurchaseOrder> {
        self.require_role(Role::Purchaser)?;
        order.status.transition(to)?;
        let updated: PurchaseOrder = self
            .put(
                &format!("/purchase-orders/{}/status", order.id),
                &OrderStatusUpdate { status: to },
            )
            .await?;
        info!("Purchase order {} moved {} -> {}", order.id, order.status, updated.status);
        Ok(updated)
    }
}
