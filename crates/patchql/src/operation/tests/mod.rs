mod executable_document_tests;
