//! Demo client roster loaded into an empty directory at startup.

use callgrid_engine::error::Result;
use callgrid_engine::BookingStore;

const DEMO_CLIENTS: [(&str, &str); 20] = [
    ("Sriram Kumar", "+91-9876543210"),
    ("Shilpa Sharma", "+91-9876543211"),
    ("Rahul Verma", "+91-9876543212"),
    ("Priya Patel", "+91-9876543213"),
    ("Amit Singh", "+91-9876543214"),
    ("Neha Gupta", "+91-9876543215"),
    ("Vikram Rao", "+91-9876543216"),
    ("Kavya Reddy", "+91-9876543217"),
    ("Arjun Nair", "+91-9876543218"),
    ("Sneha Iyer", "+91-9876543219"),
    ("Rohit Joshi", "+91-9876543220"),
    ("Meera Khanna", "+91-9876543221"),
    ("Karthik Pillai", "+91-9876543222"),
    ("Anita Agarwal", "+91-9876543223"),
    ("Deepak Mishra", "+91-9876543224"),
    ("Ritu Kapoor", "+91-9876543225"),
    ("Suresh Chandra", "+91-9876543226"),
    ("Pooja Bansal", "+91-9876543227"),
    ("Manish Tiwari", "+91-9876543228"),
    ("Divya Saxena", "+91-9876543229"),
];

/// Insert the demo roster if the store has no clients yet.
/// Returns how many clients were added.
pub fn seed_clients<S: BookingStore + ?Sized>(store: &S) -> Result<usize> {
    if !store.clients()?.is_empty() {
        return Ok(0);
    }
    for (name, phone) in DEMO_CLIENTS {
        store.add_client(name, phone)?;
    }
    Ok(DEMO_CLIENTS.len())
}
