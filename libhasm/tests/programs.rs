use libhasm::{link, scan_modules, tokens, LinkError};

#[test]
fn test_copy_links_alone() {
    let job = scan_modules([("copy.asm", include_str!("../programs/copy.asm"))]);
    let module = job.module(0).unwrap();

    assert!(module.issues().is_empty());
    assert_eq!(module.definitions().len(), 5);

    let globals = link(job.modules()).unwrap();
    assert_eq!(globals.get("L1").map(|d| d.line), Some(4));
}

#[test]
fn test_definitions_point_at_labels() {
    let job = scan_modules([("copy.asm", include_str!("../programs/copy.asm"))]);
    let module = job.module(0).unwrap();

    for def in module.definitions().iter() {
        let line = module.line(def.line).unwrap();
        let mut found = tokens(&line[def.offset..]);
        assert_eq!(found.next().map(|t| t.text), Some(def.symbol.as_str()));
        assert!(found.next().unwrap().is_separator());
    }
}

#[test]
fn test_modules_link_together() {
    let job = scan_modules([
        ("mod_a.asm", include_str!("../programs/mod_a.asm")),
        ("mod_b.asm", include_str!("../programs/mod_b.asm")),
    ]);

    let globals = link(job.modules()).unwrap();
    assert_eq!(globals.get("Y").map(|d| d.module.as_str()), Some("mod_b.asm"));
    assert_eq!(globals.get("VAL").map(|d| d.module.as_str()), Some("mod_a.asm"));
    assert_eq!(globals.get("MOD_B").map(|d| d.line), Some(0));
    assert_eq!(globals.len(), 5);

    let mod_a = job.module(0).unwrap();
    assert!(mod_a.definitions().get("Y").unwrap().external);
    assert!(mod_a.issues().is_empty());

    // Alone, each module only declares the other's symbols.
    let err = link(&job.modules()[..1]).unwrap_err();
    assert!(matches!(err, LinkError::Undefined { ref symbol, .. } if symbol == "Y"));
}
