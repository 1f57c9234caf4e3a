use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_repeated_adds_merge_into_one_line() {
    let file = common::intent_file(&["add, 1, ,", "add, 1, ,", "add, 1, ,"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("poscart"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,Luxury Sofa Set,2499.99,3,7499.97"));
}

#[test]
fn test_decrement_to_zero_empties_cart() {
    let file = common::intent_file(&["add, 2, ,", "change, 2, -1,"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("poscart"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("King Size Bed").not())
        .stdout(predicate::str::contains("0.00,0.00,0.00"));
}

#[test]
fn test_remove_and_clear() {
    let file = common::intent_file(&[
        "add, 3, ,",
        "add, 4, ,",
        "remove, 3, ,",
        "remove, 3, ,",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("poscart"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dining Table").not())
        .stdout(predicate::str::contains("4,Office Desk,699.99,1,699.99"));

    let cleared = common::intent_file(&["add, 3, ,", "add, 4, ,", "clear, , ,"]).unwrap();
    let mut cmd = Command::new(cargo_bin!("poscart"));
    cmd.arg(cleared.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.00,0.00,0.00"));
}

#[test]
fn test_checkout_empty_cart_is_refused() {
    let file = common::intent_file(&["checkout, , , cash", "add, 5, ,", "checkout, , , cash"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("poscart"));
    cmd.arg(file.path());

    // The first checkout is refused, so the later sale is still number 1.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error applying intent"))
        .stdout(predicate::str::contains("sale,1,cash"))
        .stdout(predicate::str::contains("sale,2").not());
}

#[test]
fn test_consecutive_sales() {
    let file = common::intent_file(&[
        "add, 7, ,",
        "checkout, , , check",
        "add, 8, ,",
        "checkout, , , cash",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("poscart"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sale,1,check"))
        .stdout(predicate::str::contains("7,Wardrobe,1599.99,1,1599.99"))
        .stdout(predicate::str::contains("sale,2,cash"))
        .stdout(predicate::str::contains("8,Recliner Chair,899.99,1,899.99"));
}
