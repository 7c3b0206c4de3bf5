//! The built-in nine-slide Resend invoice demo deck.

use super::spec::{CodePanel, Deck, SlideSpec};

const ARCHITECTURE: &str = r#"POST /invoice
  { lineItems, clientName, clientEmail, schedule_receipt, delay_minutes }
       │
       ├── Validate inputs (400 on failure)
       ├── generateInvoicePDF()   →  PDFKit → Buffer
       ├── sendInvoiceEmail()     →  Resend SDK (with Base64 PDF attachment)
       └── scheduleReceiptEmail() →  Resend scheduled_at (ISO 8601)

POST /webhooks/resend
  → express.raw()  (unparsed body required for Svix HMAC verification)
  → resend.webhooks.verify()
  → switch on event type  (sent, delivered, bounced, complained, ...)"#;

const SAMPLE_REQUEST: &str = r#"curl -X POST http://localhost:3000/invoice \
  -H "Content-Type: application/json" \
  -d '{
    "lineItems": [
      { "description": "Consulting",
        "quantity": 5, "rate": 150 },
      { "description": "Design review",
        "quantity": 2, "rate": 200 }
    ],
    "clientName": "Acme Corp",
    "clientEmail": "billing@acme.com",
    "schedule_receipt": true,
    "delay_minutes": 1
  }'"#;

const SAMPLE_RESPONSE: &str = r#"{
  "success": true,
  "invoiceId": "INV-20260220-4823",
  "invoice_total": 1150,
  "from": "Resend <onboarding@resend.dev>",
  "to": "billing@acme.com",
  "scheduledEmailId": "re_abc123..."
}"#;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn bullets(label: &str, heading: &str, items: &[&str]) -> SlideSpec {
    SlideSpec::Bullets {
        label: label.to_string(),
        heading: heading.to_string(),
        items: lines(items),
    }
}

/// The demo deck rendered by the binary when no deck file is given.
pub fn demo_deck() -> Deck {
    Deck::new(vec![
        SlideSpec::Title {
            title: "Resend Invoice Demo".to_string(),
            subtitle: "An agentic approach to a transactional email service".to_string(),
            byline: "Built by: [Your Name]  ·  February 2026".to_string(),
        },
        bullets(
            "01  OVERVIEW",
            "What I Built",
            &[
                "A Node.js + Express service that sends invoice emails via Resend",
                "Single  POST /invoice  endpoint orchestrates the full flow:",
                "  Validate input → Generate PDF → Send email with attachment → Optionally schedule a receipt",
                "Webhook listener at  POST /webhooks/resend  handles all Resend delivery events",
                "Covers four core Resend capabilities: transactional email, attachments, scheduling, webhooks",
            ],
        ),
        bullets(
            "02  PROCESS",
            "How I Built It — The Agentic Approach",
            &[
                "Used AI agents (via Cursor) to implement all 7 phases of the project",
                "Broke the project into 14 discrete agent tasks across phases 1–7",
                "Used 3 sub-agents with unique skills: resend-implementer, verifier, webhook-specialist",
                "Each task had a structured prompt, clear inputs, and defined outputs",
                "Agents operated with dependencies — Phase N only started after Phase N-1 completed",
                "Result: full working service built with some manual coding",
            ],
        ),
        SlideSpec::Code {
            label: "03  ARCHITECTURE".to_string(),
            heading: "Architecture".to_string(),
            code: ARCHITECTURE.to_string(),
            caption: Some(
                "Three source files:  src/index.js  ·  src/invoice.js  ·  src/email.js".to_string(),
            ),
        },
        bullets(
            "04  FEATURE DEEP-DIVE",
            "Transactional Email + PDF Attachment",
            &[
                "Invoice email sent via Resend Node SDK with HTML body and inline styles",
                "PDF generated in-memory with PDFKit — no temp files written to disk",
                "Attachment passed as Base64:  pdfBuffer.toString('base64')",
                "Resend attachment format:  [{ filename: 'invoice.pdf', content: base64String }]",
                "Unique invoice IDs generated per request:  INV-YYYYMMDD-XXXX",
            ],
        ),
        bullets(
            "05  FEATURE DEEP-DIVE",
            "Scheduled Email",
            &[
                "Optional receipt email sent after a configurable delay (in minutes)",
                "Uses Resend's  scheduled_at  field — ISO 8601 datetime",
                "Calculated as:  new Date(Date.now() + delayMinutes * 60000).toISOString()",
                "Triggered by  schedule_receipt: true  in the request payload",
                "Receipt email ID returned in API response for tracking",
            ],
        ),
        bullets(
            "06  FEATURE DEEP-DIVE",
            "Webhooks",
            &[
                "Endpoint:  POST /webhooks/resend",
                "Signature verified via  resend.webhooks.verify()  — Svix under the hood",
                "Critical detail:  express.raw()  scoped to webhook route only — unparsed body required for HMAC verification",
                "Handles 11 event types: email.sent, email.delivered, email.bounced, email.complained, and more",
                "Returns  401  on invalid signature,  200  on all valid events",
            ],
        ),
        SlideSpec::TwoColumnCode {
            label: "07  DEMO".to_string(),
            heading: "Sample Request & Response".to_string(),
            left: CodePanel::new("Request", SAMPLE_REQUEST),
            right: CodePanel::new("Response", SAMPLE_RESPONSE),
        },
        SlideSpec::Closing {
            label: "08  TAKEAWAYS".to_string(),
            heading: "Takeaways & What's Next".to_string(),
            items: lines(&[
                "Resend's SDK is clean and predictable — attachment, scheduling, and webhook verify are first-class",
                "The  scheduled_at  API is a standout feature — no job queue needed for simple delays",
                "Svix signature verification requires raw body discipline — easy to get wrong, easy to document",
                "Agentic development with structured tasks dramatically accelerated delivery",
            ]),
            follow_up_heading: "Possible Extensions".to_string(),
            follow_up: lines(&[
                "Store invoice records in a database",
                "Retry on bounce event",
                "PDF templates with branding",
                "Resend Broadcasts for bulk invoicing",
            ]),
        },
    ])
}
