use cl_lexer::{tokenize_all, Lexer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SOURCE: &str = r#"
(in-package :cl-user)

#| Utilities for
   #| nested |# demos |#
(defun fact (n)
  "Compute N!"
  (if (<= n 1)
      1
      (* n (fact (1- n)))))

(defmacro with-gensyms ((&rest names) &body body)
  `(let ,(loop for n in names collect `(,n (gensym)))
     ,@body))

(mapcar #'fact '(1 2 3 |Four| #\5)) ; trailing comment
"#;

fn lexer_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize lisp source", |b| {
        b.iter(|| Lexer::new(black_box(SOURCE)).get_tokens())
    });

    let sources = vec![SOURCE; 64];
    c.bench_function("tokenize 64 sources in parallel", |b| {
        b.iter(|| tokenize_all(black_box(&sources)))
    });
}

criterion_group!(benches, lexer_benchmark);
criterion_main!(benches);
