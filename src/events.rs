use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

/// Domain events emitted after committed mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    EstimateCreated(Uuid),
    EstimateUpdated(Uuid),
    EstimateDeleted(Uuid),

    InvoiceCreated(Uuid),
    InvoiceUpdated(Uuid),
    InvoiceDeleted(Uuid),

    PurchaseOrderCreated(Uuid),
    PurchaseOrderUpdated(Uuid),
    PurchaseOrderDeleted(Uuid),
    PurchaseOrderReceived(Uuid),

    PaymentRecorded {
        payment_id: Uuid,
        invoice_id: Uuid,
    },
    PaymentUpdated {
        payment_id: Uuid,
        invoice_id: Uuid,
    },
    PaymentDeleted {
        payment_id: Uuid,
        invoice_id: Uuid,
    },

    StockAdjusted {
        product_id: Uuid,
        delta: i32,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously. Failures are reported, never fatal:
    /// events are best-effort notifications after the fact.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Background task draining the event channel. Events are currently logged;
/// this is the seam for webhooks or queue delivery.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        info!(?event, "domain event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_flow_through_the_channel() {
        let (tx, mut rx) = mpsc::channel(8);
        let sender = EventSender::new(tx);

        let invoice_id = Uuid::new_v4();
        sender.send(Event::InvoiceCreated(invoice_id)).await.unwrap();

        match rx.recv().await {
            Some(Event::InvoiceCreated(id)) => assert_eq!(id, invoice_id),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_fails_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let sender = EventSender::new(tx);
        let result = sender.send(Event::EstimateDeleted(Uuid::new_v4())).await;
        assert!(result.is_err());
    }
}
